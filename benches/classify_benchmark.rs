use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polysnakes::{count_snakes, CubeClassifier, Cubic, Odometer, Square, Turn};

fn canonical_strings(len: usize) -> Vec<Vec<Turn>> {
    let mut odometer = Odometer::<Cubic, 3>::new(len);
    let mut strings = Vec::new();

    loop {
        strings.push(odometer.as_slice().to_vec());
        if !odometer.advance() {
            break;
        }
    }

    strings
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let strings = canonical_strings(8);

    println!("Cubic strings of 9 cells: {}", strings.len());

    c.bench_function("classify every cubic string of 9 cells", |b| {
        let mut classifier = CubeClassifier::new(8).unwrap();
        b.iter(|| {
            for s in &strings {
                black_box(classifier.classify_unchecked(s));
            }
        })
    });
    c.bench_function("count cubic snakes of 9 cells", |b| {
        b.iter(|| count_snakes::<Cubic, 3>(black_box(9), 0, |_| {}).unwrap())
    });
    c.bench_function("count square snakes of 12 cells", |b| {
        b.iter(|| count_snakes::<Square, 2>(black_box(12), 0, |_| {}).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
