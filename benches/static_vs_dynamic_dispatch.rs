//! 静的ディスパッチと動的ディスパッチのステータス出力ベンチマーク
//!
//! 抑制されるメッセージ・出力されるメッセージそれぞれのコストを測定

use criterion::{criterion_group, criterion_main, Criterion};
use status_reporter::{
    report_print, report_verbose2, NoOpStatusReporter, StatusReporter, TerminalStatusReporter,
    Verbosity,
};
use std::io;
use std::time::Duration;

fn emit_static<R: StatusReporter>(reporter: &R, i: u64) {
    report_print!(reporter, "file {i}");
    report_verbose2!(reporter, "detail {i}");
}

fn emit_dynamic(reporter: &dyn StatusReporter, i: u64) {
    report_print!(reporter, "file {i}");
    report_verbose2!(reporter, "detail {i}");
}

/// NoOp 実装のベンチマーク
fn benchmark_noop(c: &mut Criterion) {
    let mut group = c.benchmark_group("NoOp Reporter");
    group.measurement_time(Duration::from_secs(5));

    let reporter = NoOpStatusReporter::new();
    let boxed: Box<dyn StatusReporter> = Box::new(NoOpStatusReporter::new());

    group.bench_function("static", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            emit_static(&reporter, std::hint::black_box(i));
        })
    });

    group.bench_function("dynamic", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            emit_dynamic(boxed.as_ref(), std::hint::black_box(i));
        })
    });

    group.finish();
}

/// io::sink へ書き出すターミナル実装のベンチマーク
fn benchmark_terminal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Terminal Reporter");
    group.measurement_time(Duration::from_secs(5));

    let default_reporter =
        TerminalStatusReporter::with_writers(io::sink(), io::sink(), Verbosity::default());
    let verbose_reporter =
        TerminalStatusReporter::with_writers(io::sink(), io::sink(), Verbosity::verbose(2));
    let boxed: Box<dyn StatusReporter> = Box::new(TerminalStatusReporter::with_writers(
        io::sink(),
        io::sink(),
        Verbosity::verbose(2),
    ));

    group.bench_function("static/default", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            emit_static(&default_reporter, std::hint::black_box(i));
        })
    });

    group.bench_function("static/verbose2", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            emit_static(&verbose_reporter, std::hint::black_box(i));
        })
    });

    group.bench_function("dynamic/verbose2", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            emit_dynamic(boxed.as_ref(), std::hint::black_box(i));
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_noop, benchmark_terminal);
criterion_main!(benches);
