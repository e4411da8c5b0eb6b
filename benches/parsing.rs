use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use logpat::{DEFAULT_PATTERN, HostPattern, Pattern, TimePattern, compile_reader};

const SYSLOG: &str = "2023-05-01 10:22:31 sshd[1234]: Accepted password for root from 10.0.0.1";
const DEFAULT_LINE: &str =
    "[2024-03-01T12:00:00.250Z] [10.0.0.5:514] root:adm:cron [77:INFO]: job done";

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pattern::compile");

    group.bench_function("syslog", |b| {
        b.iter(|| Pattern::compile(black_box("%t %n[%p]: %m")));
    });

    group.bench_function("default", |b| {
        b.iter(|| Pattern::compile(black_box(DEFAULT_PATTERN)));
    });

    group.bench_function("nested_alternation", |b| {
        b.iter(|| Pattern::compile(black_box("%h(@(%F|%S|%Q)) @(%l(INFO)|%w) %m")));
    });

    group.finish();
}

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pattern::parse_line");

    let syslog = Pattern::compile("%t %n[%p]: %m").unwrap();
    group.bench_function("syslog", |b| {
        b.iter(|| syslog.parse_line(black_box(SYSLOG)));
    });

    let default = Pattern::compile(DEFAULT_PATTERN).unwrap();
    group.bench_function("default", |b| {
        b.iter(|| default.parse_line(black_box(DEFAULT_LINE)));
    });

    group.bench_function("mismatch_early", |b| {
        b.iter(|| default.parse_line(black_box("no brackets here")));
    });

    group.finish();
}

fn bench_sub_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_patterns");

    let time = TimePattern::compile("").unwrap();
    group.bench_function("time_default", |b| {
        b.iter(|| time.parse(black_box("2023-05-01T10:22:31.123456+02:00")));
    });

    let host = HostPattern::compile("@(%F|%S|%Q)").unwrap();
    group.bench_function("host_ipv6_fallback", |b| {
        b.iter(|| host.parse(black_box("[2001:db8::1]:443")));
    });

    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reader::read_all");
    let input: String = (0..1000).map(|i| format!("{SYSLOG} #{i}\n")).collect();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("1000_lines", |b| {
        b.iter(|| {
            let mut r = compile_reader(black_box(input.as_bytes()), "%t %n[%p]: %m", "").unwrap();
            r.read_all().unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compile,
    bench_parse_line,
    bench_sub_patterns,
    bench_reader
);
criterion_main!(benches);
