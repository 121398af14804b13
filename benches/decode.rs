use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shpjson::{FloatDecoding, ShpReader, ShpReaderConfiguration};

/// Polygon shapefile with `records` records of `rings` rings x `points` points.
fn synthetic_polygons(records: usize, rings: usize, points: usize) -> Vec<u8> {
    let mut body = Vec::new();
    for number in 0..records {
        let total = rings * points;
        let content_len = 4 + 32 + 8 + rings * 4 + total * 16;
        body.write_i32::<BigEndian>(number as i32 + 1).unwrap();
        body.write_i32::<BigEndian>((content_len / 2) as i32).unwrap();
        body.write_i32::<LittleEndian>(5).unwrap();
        for value in [0.0, 0.0, 1.0, 1.0] {
            body.write_f64::<LittleEndian>(value).unwrap();
        }
        body.write_i32::<LittleEndian>(rings as i32).unwrap();
        body.write_i32::<LittleEndian>(total as i32).unwrap();
        for ring in 0..rings {
            body.write_i32::<LittleEndian>((ring * points) as i32).unwrap();
        }
        for i in 0..total {
            let angle = i as f64 / total as f64 * std::f64::consts::TAU;
            body.write_f64::<LittleEndian>(angle.cos()).unwrap();
            body.write_f64::<LittleEndian>(angle.sin()).unwrap();
        }
    }

    let mut buf = Vec::with_capacity(100 + body.len());
    buf.write_i32::<BigEndian>(9994).unwrap();
    for _ in 0..5 {
        buf.write_i32::<BigEndian>(0).unwrap();
    }
    buf.write_i32::<BigEndian>(((100 + body.len()) / 2) as i32).unwrap();
    buf.write_i32::<LittleEndian>(1000).unwrap();
    buf.write_i32::<LittleEndian>(5).unwrap();
    for _ in 0..8 {
        buf.write_f64::<LittleEndian>(0.0).unwrap();
    }
    buf.extend_from_slice(&body);
    buf
}

fn bench_decode(c: &mut Criterion) {
    let data = synthetic_polygons(500, 4, 64);
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (name, float_decoding) in [
        ("native", FloatDecoding::Native),
        ("composed", FloatDecoding::Composed),
    ] {
        let config = ShpReaderConfiguration {
            float_decoding,
            ..Default::default()
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                ShpReader::from_bytes(black_box(data.as_slice()))
                    .with_config(config.clone())
                    .read()
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_to_geojson(c: &mut Criterion) {
    let shp = ShpReader::from_bytes(synthetic_polygons(500, 4, 64))
        .read()
        .unwrap();
    c.bench_function("to_geojson", |b| {
        b.iter(|| black_box(&shp).to_geojson().unwrap())
    });
}

criterion_group!(benches, bench_decode, bench_to_geojson);
criterion_main!(benches);
