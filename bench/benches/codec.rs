use std::hint::black_box;
use std::io::Write;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flate2::{Compression, write::GzEncoder};
use tagwire::{Codec, Config, Endian, LittleEndian, encode_patched, from_slice_le, measure, to_vec_le};

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Point {
        pub x: f32,
        pub y: f32,
        pub z: f32,
    }
}

tagwire::record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Mesh {
        pub id: u64 => "big",
        pub name: String => "nullterm",
        pub point_count: u32 => "sizeof=points",
        pub points: Vec<Point>,
        pub index_count: u32 => "sizeof=indices",
        pub indices: Vec<u16>,
    }
}

fn mesh(points: usize) -> Mesh {
    Mesh {
        id: 0x1122334455667788,
        name: format!("mesh-{points}"),
        point_count: 0,
        points: (0..points)
            .map(|i| Point {
                x: i as f32,
                y: -(i as f32),
                z: 0.5,
            })
            .collect(),
        index_count: 0,
        indices: (0..points as u16).collect(),
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for points in [16, 1024, 16384] {
        let value = mesh(points);
        let size = measure(&value).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("to_vec", points), &value, |b, v| {
            b.iter(|| to_vec_le(black_box(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("patched", points), &value, |b, v| {
            let mut v = v.clone();
            let mut out = Vec::with_capacity(size);
            b.iter(|| {
                out.clear();
                encode_patched::<LittleEndian>(&mut out, black_box(&mut v)).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("bytes", points), &value, |b, v| {
            let codec = Codec::new(Config::default().with_order(Endian::Big));
            b.iter(|| codec.to_bytes(black_box(v)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for points in [16, 1024, 16384] {
        let bytes = to_vec_le(&mesh(points)).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("from_slice", points), &bytes, |b, data| {
            b.iter(|| from_slice_le::<Mesh>(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("buf", points), &bytes, |b, data| {
            let data = bytes::Bytes::copy_from_slice(data);
            let codec = Codec::default();
            b.iter(|| {
                let mut value = Mesh::default();
                codec.decode_buf(black_box(data.clone()), &mut value).unwrap();
                value
            })
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let value = mesh(16384);
    c.bench_function("measure", |b| b.iter(|| measure(black_box(&value)).unwrap()));
}

fn bench_gzip(c: &mut Criterion) {
    let value = mesh(1024);
    c.bench_function("encode_gzip", |b| {
        b.iter(|| {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
            tagwire::encode_le(&mut encoder, black_box(&value)).unwrap();
            encoder.flush().unwrap();
            encoder.finish().unwrap()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_measure, bench_gzip);
criterion_main!(benches);
