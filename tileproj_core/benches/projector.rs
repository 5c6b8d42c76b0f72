use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tileproj_core::{BBox, Projector, Srs};

fn bench_pixel(c: &mut Criterion) {
	let projector = Projector::default();
	c.bench_function("Projector pixel_from_lon_lat", |b| {
		b.iter(|| projector.pixel_from_lon_lat(black_box([13.404954, 52.520008]), black_box(14)))
	});
	c.bench_function("Projector lon_lat_from_pixel", |b| {
		b.iter(|| projector.lon_lat_from_pixel(black_box([2253332.0, 1375544.0]), black_box(14)))
	});
}

fn bench_tiles(c: &mut Criterion) {
	let projector = Projector::default();
	c.bench_function("Projector bbox_from_tile", |b| {
		b.iter(|| projector.bbox_from_tile(black_box(8800), black_box(5373), 14, false, Srs::Wgs84))
	});
	let berlin = BBox::new(13.08, 52.33, 13.76, 52.68);
	c.bench_function("Projector tile_bounds_from_bbox", |b| {
		b.iter(|| projector.tile_bounds_from_bbox(black_box(&berlin), 14, true, Srs::Wgs84))
	});
}

fn bench_construction(c: &mut Criterion) {
	c.bench_function("Projector new (cached size)", |b| b.iter(|| Projector::new(black_box(256))));
}

criterion_group!(benches, bench_pixel, bench_tiles, bench_construction);
criterion_main!(benches);
