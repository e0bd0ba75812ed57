use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use detaug_image::Image;
use detaug_imgproc::color;

fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hsv");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let data = (0..width * height * 3).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8, 3>::new(image_size, data).unwrap();
        let hsv = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("hsv_from_rgb", &parameter_string),
            &(&image, &hsv),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color::hsv_from_rgb(black_box(src), black_box(&mut dst)))
            },
        );

        let mut hsv_full = hsv.clone();
        color::hsv_from_rgb(&image, &mut hsv_full).unwrap();

        group.bench_with_input(
            BenchmarkId::new("adjust_hsv", &parameter_string),
            &(&hsv_full, &hsv),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color::adjust_hsv(black_box(src), black_box(&mut dst), 12.0, 1.3, 0.8))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rgb_from_hsv", &parameter_string),
            &(&hsv_full, &image),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| color::rgb_from_hsv(black_box(src), black_box(&mut dst)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hsv);
criterion_main!(benches);
