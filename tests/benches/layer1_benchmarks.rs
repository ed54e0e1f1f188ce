//! # Layer-1 Benchmarks
//!
//! Performance validation for the aggregation pipeline:
//!
//! | Path | Claim | Target |
//! |------|-------|--------|
//! | `process()` full detector | linear in towers, no allocation | < 1ms |
//! | selective fill | O(1) routing per tower | < 1us per set |
//! | `clear_event()` | linear arena reset | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use calo_geometry::{CaloGeometry, TowerIndex};
use calo_layer1::{FirmwareVersion, Layer1};

fn random_towers(count: usize) -> Vec<(TowerIndex, u32, u32)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let eta = loop {
                let e = rng.gen_range(-32i32..=32);
                if e != 0 {
                    break e;
                }
            };
            let phi = rng.gen_range(0u32..72);
            (
                TowerIndex::new(eta, phi),
                rng.gen_range(0u32..=0xFE),
                rng.gen_range(0u32..=0xFE),
            )
        })
        .collect()
}

fn bench_process_full_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer1-process");
    group.throughput(Throughput::Elements(CaloGeometry::N_TOWERS as u64));

    for firmware in [FirmwareVersion::V0, FirmwareVersion::V2, FirmwareVersion::V3] {
        let mut l1 = Layer1::new(CaloGeometry::new(), firmware).unwrap();
        l1.clear_event().unwrap();
        for (index, ecal, hcal) in random_towers(CaloGeometry::N_TOWERS) {
            l1.set_ecal_data(index, false, ecal).unwrap();
            l1.set_hcal_data(index, 0, hcal).unwrap();
        }
        group.bench_with_input(
            BenchmarkId::new("full_detector", firmware.number()),
            &firmware,
            |b, _| {
                b.iter(|| {
                    l1.process().unwrap();
                    black_box(l1.summary())
                })
            },
        );
    }
    group.finish();
}

fn bench_selective_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer1-fill");

    for count in [64usize, 512, 4608] {
        let towers = random_towers(count);
        let mut l1 = Layer1::new(CaloGeometry::new(), FirmwareVersion::V2).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("set_towers", count), &count, |b, _| {
            b.iter(|| {
                for &(index, ecal, hcal) in &towers {
                    l1.set_ecal_data(index, false, ecal).unwrap();
                    l1.set_hcal_data(index, 0, hcal).unwrap();
                }
            })
        });
    }
    group.finish();
}

fn bench_clear_event(c: &mut Criterion) {
    let mut l1 = Layer1::new(CaloGeometry::new(), FirmwareVersion::V0).unwrap();
    c.bench_function("layer1-clear_event", |b| {
        b.iter(|| l1.clear_event().unwrap())
    });
}

criterion_group!(
    benches,
    bench_process_full_detector,
    bench_selective_fill,
    bench_clear_event
);
criterion_main!(benches);
