//! Criterion benchmarks for rust_scoped_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_scoped_logger::prelude::*;
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let root = Logger::with_channel(Arc::new(MemoryChannel::new()));
    root.configure(LoggerConfigPatch::new().prefix("[BENCH]"));

    group.bench_function("scope", |b| {
        b.iter(|| black_box(root.scope(black_box("child"))));
    });

    group.bench_function("scope_depth_4", |b| {
        b.iter(|| black_box(root.scope("a").scope("b").scope("c").scope("d")));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

/// Channel that accepts and discards every line
struct NullChannel;

impl OutputChannel for NullChannel {
    fn write_error(&self, record: &LogRecord<'_>) -> Result<()> {
        black_box(record.line);
        Ok(())
    }
    fn write_warn(&self, record: &LogRecord<'_>) -> Result<()> {
        black_box(record.line);
        Ok(())
    }
    fn write_info(&self, record: &LogRecord<'_>) -> Result<()> {
        black_box(record.line);
        Ok(())
    }
    fn write_debug(&self, record: &LogRecord<'_>) -> Result<()> {
        black_box(record.line);
        Ok(())
    }
    fn name(&self) -> &str {
        "null"
    }
}

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_channel(Arc::new(NullChannel)).scope("bench");

    group.bench_function("info_emitted", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("info_with_args", |b| {
        let code = 500;
        b.iter(|| logger.info_with(black_box("Info message"), &[&code, &"detail"]));
    });

    let filtered = Logger::builder()
        .level(LogLevel::Error)
        .channel(Arc::new(NullChannel))
        .build();
    group.bench_function("debug_filtered", |b| {
        b.iter(|| filtered.debug(black_box("Debug message")));
    });

    let disabled = Logger::builder()
        .enabled(false)
        .channel(Arc::new(NullChannel))
        .build();
    group.bench_function("disabled", |b| {
        b.iter(|| disabled.error(black_box("Error message")));
    });

    group.bench_function("macro_filtered", |b| {
        b.iter(|| rust_scoped_logger::debug!(filtered, "value {}", black_box(42)));
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_logging);
criterion_main!(benches);
