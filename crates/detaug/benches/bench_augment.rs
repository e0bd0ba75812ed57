use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use detaug::{AugmentConfig, Augmenter, BoundingBox, Instance};
use detaug_image::{Image, ImageSize};
use rand::{rngs::StdRng, SeedableRng};

fn bench_augment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Augment");

    let net_size = ImageSize {
        width: 416,
        height: 416,
    };
    let augmenter = Augmenter::new(AugmentConfig::new(net_size)).unwrap();

    for (width, height) in [(320, 240), (640, 480), (1280, 960)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::from_size_pixel(image_size, [90, 120, 150]).unwrap();
        let boxes = (0..16)
            .map(|i| {
                let x = (i * 17 % *width) as f32;
                let y = (i * 13 % *height) as f32;
                BoundingBox::with_label(x, x + 40.0, y, y + 30.0, i)
            })
            .collect();
        let instance = Instance::new(image, boxes);

        group.bench_with_input(
            BenchmarkId::new("single", &parameter_string),
            &instance,
            |b, i| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| augmenter.augment(black_box(i), &mut rng))
            },
        );

        let batch = vec![instance.clone(); 8];
        group.bench_with_input(
            BenchmarkId::new("batch8", &parameter_string),
            &batch,
            |b, i| b.iter(|| augmenter.augment_batch(black_box(i), 0)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_augment);
criterion_main!(benches);
