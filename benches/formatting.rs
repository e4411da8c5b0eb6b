use criterion::{Criterion, black_box, criterion_group, criterion_main};
use logpat::{DEFAULT_TEMPLATE, Entry, JsonWriter, Output, Pattern, Template, compile_writer};
use std::io;

fn sample() -> Entry {
    Pattern::compile("%t %u %h %n[%p] %l %w %m")
        .unwrap()
        .parse_line("2023-05-01T10:22:31Z bob gw.lan sshd[42] INFO alpha the rest of it")
        .unwrap()
}

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("Template");
    let entry = sample();

    group.bench_function("compile_default", |b| {
        b.iter(|| Template::compile(black_box(DEFAULT_TEMPLATE)));
    });

    let all = Template::compile("%t %u %g %h %n[%p] %l %0 %1 %m %#").unwrap();
    group.bench_function("render_all_fields", |b| {
        b.iter(|| all.render(black_box(&entry)));
    });

    let empty = Entry::default();
    group.bench_function("render_sentinels", |b| {
        b.iter(|| all.render(black_box(&empty)));
    });

    group.finish();
}

fn bench_writers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Output::write");
    let entry = sample();

    let mut text = compile_writer(io::sink(), DEFAULT_TEMPLATE).unwrap();
    group.bench_function("text", |b| {
        b.iter(|| text.write(black_box(&entry)));
    });

    let mut json = JsonWriter::new(io::sink());
    group.bench_function("json", |b| {
        b.iter(|| json.write(black_box(&entry)));
    });

    group.finish();
}

criterion_group!(benches, bench_template, bench_writers);
criterion_main!(benches);
