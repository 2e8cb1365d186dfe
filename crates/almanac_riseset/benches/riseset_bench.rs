use criterion::{Criterion, black_box, criterion_group, criterion_main};
use almanac_ephem::{lunar_position_jd, solar_position_jd};
use almanac_frames::EquatorialPosition;
use almanac_riseset::{
    GeoLocation, STAR_HORIZON_DEG, SUN_STANDARD_HORIZON_DEG, interpolate_angle, moonrise_moonset,
    rise_transit_set_with_sidereal, sunrise_sunset,
};
use almanac_time::CalendarDate;

fn position_bench(c: &mut Criterion) {
    let jd = 2_457_825.5;

    let mut group = c.benchmark_group("position");
    group.bench_function("solar_position_jd", |b| {
        b.iter(|| solar_position_jd(black_box(jd)))
    });
    group.bench_function("lunar_position_jd", |b| {
        b.iter(|| lunar_position_jd(black_box(jd)))
    });
    group.finish();
}

fn solver_bench(c: &mut Criterion) {
    let location = GeoLocation::new(42.3333, -71.0833, 0.0);
    let samples = [
        EquatorialPosition::new(40.680_21, 18.047_61, 0.0),
        EquatorialPosition::new(41.731_29, 18.440_92, 0.0),
        EquatorialPosition::new(42.782_04, 18.827_42, 0.0),
    ];

    let mut group = c.benchmark_group("solver");
    group.bench_function("rise_transit_set", |b| {
        b.iter(|| {
            rise_transit_set_with_sidereal(
                black_box(&location),
                STAR_HORIZON_DEG,
                black_box(&samples),
                177.741_66,
                56.0,
            )
        })
    });
    group.bench_function("interpolate_angle", |b| {
        b.iter(|| interpolate_angle(black_box([358.0, 0.5, 3.0]), black_box(0.37)))
    });
    group.finish();
}

fn facade_bench(c: &mut Criterion) {
    let ottawa = GeoLocation::new(45.4215, -75.6972, 0.0);
    let date = CalendarDate::new(2017, 3, 16.0);

    let mut group = c.benchmark_group("facade");
    group.bench_function("sunrise_sunset", |b| {
        b.iter(|| sunrise_sunset(black_box(&ottawa), black_box(&date), SUN_STANDARD_HORIZON_DEG))
    });
    group.bench_function("moonrise_moonset", |b| {
        b.iter(|| moonrise_moonset(black_box(&ottawa), black_box(&date)))
    });
    group.finish();
}

criterion_group!(benches, position_bench, solver_bench, facade_bench);
criterion_main!(benches);
