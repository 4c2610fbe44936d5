use criterion::{Criterion, criterion_group, criterion_main};
use knp_site::api::{NavigationIntent, SiteEngine, SiteEngineConfig};
use knp_site::core::{MemberId, ServiceId, resolve_path};
use knp_site::interaction::{Carousel, CarouselTiming};
use knp_site::render::HeadlessHost;
use std::hint::black_box;

fn bench_resolve_path_mixed(c: &mut Criterion) {
    let paths = [
        "/",
        "/about",
        "/services",
        "/members/7",
        "/members/999",
        "/news?page=2",
        "/location/",
        "/unknown/deep/path",
    ];

    c.bench_function("resolve_path_mixed", |b| {
        b.iter(|| {
            for path in paths {
                let _ = resolve_path(black_box(path), |id| (1..=9).contains(&id.get()));
            }
        })
    });
}

fn bench_carousel_ticks_10k(c: &mut Criterion) {
    let timing = CarouselTiming {
        interval_ms: 4_000,
        transition_ms: 500,
    };

    c.bench_function("carousel_ticks_10k", |b| {
        b.iter(|| {
            let mut carousel = Carousel::mount(
                [1, 6, 7, 2, 5].map(MemberId::new).to_vec(),
                timing,
                false,
                0,
            );
            let mut now = 0;
            for _ in 0..10_000 {
                now += 4_000;
                let _ = carousel.advance_to(black_box(now));
            }
        })
    });
}

fn bench_section_navigation_round_trip(c: &mut Criterion) {
    let mut engine =
        SiteEngine::new(HeadlessHost::default(), SiteEngineConfig::default()).expect("engine init");
    let target = ServiceId::new(4).expect("valid service id");

    c.bench_function("section_navigation_round_trip", |b| {
        b.iter(|| {
            engine
                .navigate(black_box(NavigationIntent::to_service_section(target)))
                .expect("navigate");
            engine.render().expect("render");
            engine.go_home().expect("navigate home");
            engine.host_mut().scroll_requests.clear();
        })
    });
}

fn bench_engine_snapshot_json(c: &mut Criterion) {
    let mut engine =
        SiteEngine::new(HeadlessHost::default(), SiteEngineConfig::default()).expect("engine init");
    engine.advance_time(9_000).expect("advance");

    c.bench_function("engine_snapshot_json", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_path_mixed,
    bench_carousel_ticks_10k,
    bench_section_navigation_round_trip,
    bench_engine_snapshot_json
);
criterion_main!(benches);
