#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    unused_results,
    clippy::unwrap_used
)]

use criterion::{criterion_group, criterion_main, Criterion};
use dbman_query::render::{Pretty, Table};
use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Value};
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

const COLUMNS: usize = 8;
const ROWS: usize = 1_000;

fn cell(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..32);
    Alphanumeric.sample_string(rng, len)
}

fn random_table() -> Table {
    let mut rng = rand::thread_rng();

    Table {
        fields: (0..COLUMNS).map(|_| cell(&mut rng)).collect(),
        rows: (0..ROWS)
            .map(|_| (0..COLUMNS).map(|_| cell(&mut rng)).collect())
            .collect(),
    }
}

fn to_value(table: &Table) -> Value {
    let string = |s: &String| Value {
        kind: Some(Kind::StringValue(s.clone())),
    };
    let list = |values: Vec<Value>| Value {
        kind: Some(Kind::ListValue(ListValue { values })),
    };

    Value {
        kind: Some(Kind::StructValue(Struct {
            fields: [
                ("fields".to_owned(), list(table.fields.iter().map(string).collect())),
                (
                    "rows".to_owned(),
                    list(
                        table
                            .rows
                            .iter()
                            .map(|row| list(row.iter().map(string).collect()))
                            .collect(),
                    ),
                ),
            ]
            .into_iter()
            .collect(),
        })),
    }
}

fn render_table(c: &mut Criterion) {
    let table = random_table();
    let mut out = Vec::new();

    c.bench_function("render_table", |b| {
        b.iter(|| {
            out.clear();
            table.write_to(&mut out).unwrap();
        });
    });
}

fn render_pretty(c: &mut Criterion) {
    let value = to_value(&random_table());
    let pretty = Pretty::default();
    let mut out = Vec::new();

    c.bench_function("render_pretty", |b| {
        b.iter(|| {
            out.clear();
            pretty.write_to(&value, &mut out).unwrap();
        });
    });
}

criterion_group!(benches, render_table, render_pretty);
criterion_main!(benches);
