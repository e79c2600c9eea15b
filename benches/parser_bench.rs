//! Benchmarks for the parser.
//!
//! Run with: cargo bench --bench parser_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use esz::{parse_module, parse_script, Options};

/// Small expression-heavy source
const SMALL_SOURCE: &str = r#"
const x = 42;
const y = "hello";
function add(a, b) {
    return a + b;
}
add(x, y.length);
"#;

/// Medium source with classes, destructuring, and templates
const MEDIUM_SOURCE: &str = r#"
class UserService {
    constructor(store) {
        this.store = store;
        this.users = new Map();
    }

    load({id, name = 'anonymous', ...rest}) {
        const key = `user:${id}`;
        if (this.users.has(key)) {
            return this.users.get(key);
        }
        const user = {id, name, ...rest};
        this.users.set(key, user);
        return user;
    }

    *entries() {
        for (const [key, value] of this.users) {
            yield {key, value};
        }
    }
}

async function main() {
    const service = new UserService(globalStore);
    const users = [1, 2, 3].map(id => service.load({id}));
    try {
        await Promise.all(users);
    } catch (error) {
        console.error(/timeout/i.test(error.message) ? 'slow' : 'broken');
    }
}
"#;

const MODULE_SOURCE: &str = r#"
import {EventEmitter} from 'events';
import defaultExport, * as helpers from './helpers';

export const VERSION = '1.0.0';

export default class Runner extends EventEmitter {
    run(tasks) {
        return tasks.reduce((acc, task) => acc.then(() => task()), Promise.resolve());
    }
}

export {helpers};
"#;

fn bench_parse_small(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("parse_small", |b| {
        b.iter(|| parse_script(black_box(SMALL_SOURCE), &options).unwrap())
    });
}

fn bench_parse_medium(c: &mut Criterion) {
    let options = Options {
        next: true,
        ..Options::default()
    };
    c.bench_function("parse_medium", |b| {
        b.iter(|| parse_script(black_box(MEDIUM_SOURCE), &options).unwrap())
    });
}

fn bench_parse_module(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("parse_module", |b| {
        b.iter(|| parse_module(black_box(MODULE_SOURCE), &options).unwrap())
    });
}

fn bench_parse_with_metadata(c: &mut Criterion) {
    let options = Options {
        next: true,
        ranges: true,
        locations: true,
        raw: true,
        ..Options::default()
    };
    c.bench_function("parse_medium_with_metadata", |b| {
        b.iter(|| parse_script(black_box(MEDIUM_SOURCE), &options).unwrap())
    });
}

fn bench_parse_throughput(c: &mut Criterion) {
    // Each repetition gets its own block so the lexical names don't collide.
    let big: String = (0..64).map(|_| format!("{{\n{MEDIUM_SOURCE}\n}}\n")).collect();
    let options = Options {
        next: true,
        ..Options::default()
    };
    let mut group = c.benchmark_group("parser_throughput");
    group.throughput(Throughput::Bytes(big.len() as u64));
    group.bench_function("parse_repeated_medium", |b| {
        b.iter(|| parse_script(black_box(&big), &options).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_small,
    bench_parse_medium,
    bench_parse_module,
    bench_parse_with_metadata,
    bench_parse_throughput
);
criterion_main!(benches);
