use criterion::*;

use modus_core::prelude::*;

use modus_core::config::{FractalsConfig, SpiralsConfig};
use modus_core::geom::{LineVertex, Strip};
use modus_core::math::Xorshift64;

const DIMS: Dims = (320, 240);

fn zigzag(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| pt2(i as f32 / n as f32, (i % 2) as f32 * 0.01))
        .collect()
}

fn strips(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip");
    for n in [100, 1000, 10000] {
        let points = zigzag(n);
        let colors = vec![1; n];
        let alphas = vec![1.0; n];
        for topology in [Topology::Quads, Topology::Mitred] {
            let strip = Strip::new(topology, n, 0.005);
            let mut out: Vec<LineVertex> = strip.vertex_buffer();
            group.throughput(Throughput::Elements(n as u64));
            group.bench_function(format!("{topology:?}/{n}"), |b| {
                b.iter(|| {
                    strip.update(&points, &colors, &alphas, &mut out);
                    black_box(&out);
                })
            });
        }
    }
    group.finish();
}

fn fractals(c: &mut Criterion) {
    let aspect = Aspect::from_dims(DIMS);
    for depths in [6, 9] {
        let cfg = FractalsConfig { depths, ..FractalsConfig::default() };
        let mut fractals = Fractals::new(&cfg, aspect);
        c.bench_function(&format!("fractals/{depths}"), |b| {
            b.iter(|| fractals.update())
        });
    }
}

fn spirals(c: &mut Criterion) {
    let aspect = Aspect::from_dims(DIMS);
    let cfg = SpiralsConfig::default();
    let mut rng = Xorshift64::from_seed(1);
    let mut spirals = Spirals::new(&cfg, aspect, 1200, &mut rng);
    c.bench_function("spirals/update", |b| {
        b.iter(|| spirals.update(|n| _ = black_box(n)))
    });
}

fn raster(c: &mut Criterion) {
    let aspect = Aspect::from_dims(DIMS);
    let palette = Palette::new(4);
    let mut fractals = Fractals::new(
        &FractalsConfig { depths: 6, thickness: 0.02, ..Default::default() },
        aspect,
    );
    fractals.update();
    let mut fb = Framebuf::new(DIMS);
    c.bench_function("framebuf/fractals", |b| {
        b.iter(|| {
            fb.clear();
            fractals.draw(&mut fb, &palette)
        })
    });
}

criterion_group!(benches, strips, fractals, spirals, raster);
criterion_main!(benches);
