use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use heatgrid_image::Grid;
use heatgrid_imgproc::filter::gaussian_smooth;
use heatgrid_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Smooth");

    for (width, height) in [(64, 48), (320, 240), (640, 480)].iter() {
        for sigma in [1.0, 3.0].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}x{}", width, height, sigma);

            let data = (0..width * height)
                .map(|i| (i % 97) as f64)
                .collect::<Vec<_>>();
            let src = Grid::new([*width, *height].into(), data).unwrap();
            let dst = Grid::from_size_val(src.size(), 0.0);

            for (name, strategy) in [
                ("serial", ExecutionStrategy::Serial),
                ("parallel", ExecutionStrategy::Parallel),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(name, &parameter_string),
                    &(&src, &dst),
                    |b, i| {
                        let (src, mut dst) = (i.0, i.1.clone());
                        b.iter(|| black_box(gaussian_smooth(src, &mut dst, *sigma, 4.0, strategy)))
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
