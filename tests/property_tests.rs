use knp_site::api::{NavigationIntent, SiteEngine, SiteEngineConfig};
use knp_site::core::{MemberId, PageId, Route, RouteRedirect, ServiceId, resolve_path};
use knp_site::interaction::{Carousel, CarouselTiming};
use knp_site::render::HeadlessHost;
use proptest::prelude::*;

const DECLARED_SEGMENTS: [&str; 5] = ["about", "services", "members", "news", "location"];

fn timing(interval_ms: u64) -> CarouselTiming {
    CarouselTiming {
        interval_ms,
        transition_ms: 500,
    }
}

proptest! {
    #[test]
    fn unrecognized_first_segment_always_resolves_home(
        segment in "[a-z]{1,12}",
        rest in proptest::collection::vec("[a-z0-9]{1,6}", 0..3),
    ) {
        prop_assume!(!DECLARED_SEGMENTS.contains(&segment.as_str()));
        let mut path = format!("/{segment}");
        for part in &rest {
            path.push('/');
            path.push_str(part);
        }
        let resolved = resolve_path(&path, |_| true);
        prop_assert_eq!(resolved.route, Route::Home);
        prop_assert_eq!(resolved.redirect, Some(RouteRedirect::ToHome));
    }

    #[test]
    fn member_paths_never_resolve_to_unknown_members(raw in 0_u32..2_000) {
        let path = format!("/members/{raw}");
        let resolved = resolve_path(&path, |id| (1..=9).contains(&id.get()));
        if (1..=9).contains(&raw) {
            prop_assert_eq!(resolved.route, Route::MemberDetail(MemberId::new(raw)));
        } else {
            prop_assert_eq!(resolved.route, Route::Members);
            prop_assert_eq!(resolved.redirect, Some(RouteRedirect::ToMembers));
        }
    }

    #[test]
    fn n_ticks_return_to_start(
        len in 2_usize..12,
        start in 0_usize..12,
        interval_ms in 1_u64..10_000,
    ) {
        let start = start % len;
        let mut carousel = Carousel::mount((0..len).collect(), timing(interval_ms), false, 0);
        carousel.select(start, 0).expect("select in range");

        let steps = carousel.advance_to(interval_ms * len as u64);
        prop_assert_eq!(steps.len(), len);
        prop_assert_eq!(carousel.state().active_index, start);
        for (offset, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.to, (start + offset + 1) % len);
        }
    }

    #[test]
    fn split_clock_advances_fire_same_ticks_as_one_jump(
        deltas in proptest::collection::vec(0_u64..9_000, 1..20),
    ) {
        let mut stepped = Carousel::mount(vec!['a', 'b', 'c', 'd', 'e'], timing(4_000), false, 0);
        let mut now = 0;
        let mut fired = Vec::new();
        for delta in &deltas {
            now += delta;
            fired.extend(stepped.advance_to(now).into_iter().map(|step| step.at_ms));
        }

        let mut jumped = Carousel::mount(vec!['a', 'b', 'c', 'd', 'e'], timing(4_000), false, 0);
        let all: Vec<u64> = jumped.advance_to(now).into_iter().map(|step| step.at_ms).collect();

        prop_assert_eq!(fired, all);
        prop_assert_eq!(stepped.state(), jumped.state());
    }

    #[test]
    fn paused_carousel_only_moves_on_select(
        selects in proptest::collection::vec((0_usize..5, 0_u64..50_000), 0..10),
    ) {
        let mut carousel = Carousel::mount(vec![1, 6, 7, 2, 5], timing(4_000), false, 0);
        carousel.pointer_enter(0);
        let mut expected = 0;
        let mut now = 0;
        for (index, delta) in selects {
            now += delta;
            prop_assert!(carousel.advance_to(now).is_empty());
            carousel.select(index, now).expect("select in range");
            expected = index;
        }
        prop_assert!(carousel.advance_to(now + 1_000_000).is_empty());
        prop_assert_eq!(carousel.state().active_index, expected);
    }

    #[test]
    fn navigation_fires_exactly_one_scroll_kind(
        pages in proptest::collection::vec(0_usize..7, 1..12),
        targets in proptest::collection::vec(proptest::option::of(1_u32..10), 1..12),
    ) {
        let mut engine = SiteEngine::new(HeadlessHost::default(), SiteEngineConfig::default())
            .expect("engine init");
        for (page_index, target) in pages.iter().zip(targets.iter()) {
            let before = engine.host().scroll_requests.len();
            let intent = match target {
                Some(raw) => NavigationIntent::to_service_section(
                    ServiceId::new(*raw).expect("non-zero id"),
                ),
                None => NavigationIntent::to(PageId::ALL[*page_index]),
            };
            engine.navigate(intent).expect("navigate");
            engine.render().expect("render");
            let after = engine.host().scroll_requests.len();

            let known_section = target.is_some_and(|raw| raw <= 6);
            let expected = usize::from(target.is_none() || known_section);
            prop_assert_eq!(after - before, expected);
        }
    }
}
