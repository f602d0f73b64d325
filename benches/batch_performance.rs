use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_utils::batch::{hourly_datetimes, solar_positions_for_year};
use solar_utils::{DateTime, Location, Weather, solar_position, solar_positions};
use std::hint::black_box;

fn location() -> Location {
    Location::new(35.56836, -119.2022, -8.0)
}

fn weather() -> Weather {
    Weather::new(1015.62055, 40.0)
}

fn benchmark_single_position(c: &mut Criterion) {
    let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);

    c.bench_function("solpos_single", |b| {
        b.iter(|| {
            solar_position(
                black_box(location()),
                black_box(datetime),
                black_box(weather()),
            )
            .unwrap()
        })
    });
}

fn benchmark_hourly_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly_batch");
    let start = NaiveDate::from_ymd_opt(2017, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for &count in &[24, 1000, 8760] {
        let datetimes = hourly_datetimes(start, count).unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("batch", count), &datetimes, |b, datetimes| {
            b.iter(|| {
                solar_positions(black_box(location()), black_box(datetimes), weather()).unwrap()
            })
        });

        // Same work through repeated single calls, for comparison
        group.bench_with_input(
            BenchmarkId::new("single_calls", count),
            &datetimes,
            |b, datetimes| {
                b.iter(|| {
                    for &datetime in datetimes {
                        let _result =
                            solar_position(black_box(location()), datetime, weather()).unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

fn benchmark_year_with_generation(c: &mut Criterion) {
    c.bench_function("solar_positions_for_year", |b| {
        b.iter(|| {
            solar_positions_for_year(black_box(location()), black_box(2017), weather()).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_position,
    benchmark_hourly_batches,
    benchmark_year_with_generation
);
criterion_main!(benches);
