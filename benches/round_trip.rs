use criterion::{criterion_group, criterion_main, Criterion};
use people_index::{
    index::{lookup::ZipcodeLookup, people_index::PeopleIndex},
    pipeline::round_trip,
    sample::{bay_area::BayAreaSample, options::SampleOptions, DataSource, StaticSource},
    schema::{people_index::PeopleIndexSchema, record::RecordSchema},
};

fn sample_options() -> SampleOptions {
    SampleOptions::default()
        .set_seed(7)
        .set_people_per_zipcode(100)
        .set_unmatched_people(500)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut sample = BayAreaSample::new(sample_options());
    let city_zipcodes = sample.city_zipcodes();
    let people = sample.people();

    c.bench_function("build nested scan", |b| {
        b.iter(|| PeopleIndex::new(&city_zipcodes, &people))
    });

    c.bench_function("build zipcode lookup", |b| {
        b.iter(|| ZipcodeLookup::new(&city_zipcodes).build_index(&people))
    });

    let index = PeopleIndex::new(&city_zipcodes, &people);
    let schema = PeopleIndexSchema::new();

    c.bench_function("dump then load", |b| {
        b.iter(|| {
            let value = schema.dump(&index);
            schema.load_value(&value).unwrap()
        })
    });

    c.bench_function("full round trip", |b| {
        b.iter(|| {
            let mut source = StaticSource::new(city_zipcodes.clone(), people.clone());
            round_trip(&mut source).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
