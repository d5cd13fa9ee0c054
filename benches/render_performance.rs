//! Performance benchmarks for the render cycle
//!
//! Every control change in the shell runs one render cycle: two point
//! volumes plus a full conversion profile. These benchmarks keep an eye on
//! how long that takes and how profile generation scales with the grid size.
//!
//! # What We're Measuring
//!
//! 1. **Point volumes**: `cstr_volume` and `pfr_volume` on their own
//! 2. **Profile generation**: closed-form PFR over 10 to 10 000 samples
//! 3. **Render cycle**: `render` at the default operating point
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench render_performance
//!
//! # Only the profile scaling group
//! cargo bench --bench render_performance profile
//! ```
//!
//! # Expected Results
//!
//! Profile time should scale linearly with the number of samples. The
//! render cycle is dominated by the profile (one `ln` per sample).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use rctr_vol::kinetics::{cstr_volume, pfr_volume, Pfr, ReactionParameters};
use rctr_vol::presentation::{render, RenderedView};
use rctr_vol::profile::conversion_profile;

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Point volumes at the default operating point
fn benchmark_point_volumes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Point Volumes");

    group.bench_function("CSTR", |b| {
        b.iter(|| cstr_volume(black_box(1.0), black_box(1.0), black_box(0.9)))
    });

    group.bench_function("PFR", |b| {
        b.iter(|| pfr_volume(black_box(1.0), black_box(1.0), black_box(0.9)))
    });

    group.finish();
}

/// Profile generation with different grid sizes
///
/// # Test Configuration
///
/// - **Samples**: 10, 100, 1000, 10 000
/// - **Operating point**: k = 1, F_A0 = 1
///
/// 100 is the size the render cycle uses.
fn benchmark_profile_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Conversion Profile");

    for n_points in [10usize, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                b.iter(|| conversion_profile(&Pfr, black_box(1.0), black_box(1.0), n_points))
            },
        );
    }

    group.finish();
}

/// Full render cycle, with and without the text formatting
fn benchmark_render_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("Render Cycle");
    let params = ReactionParameters::new(1.0, 1.0, 0.9);

    group.bench_function("render", |b| {
        b.iter(|| render(black_box(params)))
    });

    group.bench_function("render + text", |b| {
        b.iter(|| RenderedView::new(black_box(params)).to_string())
    });

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_point_volumes,
    benchmark_profile_scaling,
    benchmark_render_cycle,
);

criterion_main!(benches);
