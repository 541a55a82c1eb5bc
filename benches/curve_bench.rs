use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_modeling_editor::curves::{bspline, de_casteljau, subdivision};
use curve_modeling_editor::{ControlPointSet, CurveKind, CurveOutput};
use glam::Vec2;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count.max(2) as f32;
            Vec2::new(t, 0.5 + 0.4 * (t * 12.0).sin())
        })
        .collect()
}

fn bench_de_casteljau(c: &mut Criterion) {
    let mut group = c.benchmark_group("de_casteljau");

    for &point_count in &[4usize, 16, 64] {
        let points = build_control_points(point_count);
        group.bench_with_input(
            BenchmarkId::new("lod_200", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut out = CurveOutput::new();
                    de_casteljau::evaluate(black_box(points), 200, &mut out)
                        .expect("LOD gültig");
                    black_box(out.segments.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_bspline(c: &mut Criterion) {
    let mut group = c.benchmark_group("bspline");

    for &point_count in &[4usize, 64, 512] {
        let points = build_control_points(point_count);
        group.bench_with_input(
            BenchmarkId::new("lod_50", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let mut out = CurveOutput::new();
                    bspline::evaluate(black_box(points), 50, &mut out).expect("LOD gültig");
                    black_box(out.segments.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_subdivision(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivision");
    let points = build_control_points(8);

    for &depth in &[4u32, 8, 10] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut out = CurveOutput::new();
                subdivision::evaluate(black_box(&points), depth, &mut out);
                black_box(out.segments.len())
            })
        });
    }

    group.finish();
}

fn bench_curve_kinds(c: &mut Criterion) {
    let set = ControlPointSet::from_positions(build_control_points(32));

    for kind in CurveKind::ALL {
        c.bench_function(&format!("evaluate_{kind:?}"), |b| {
            b.iter(|| {
                let output = kind.evaluate(black_box(&set), 8).expect("LOD gültig");
                black_box(output.segments.len())
            })
        });
    }
}

criterion_group!(
    benches,
    bench_de_casteljau,
    bench_bspline,
    bench_subdivision,
    bench_curve_kinds
);
criterion_main!(benches);
