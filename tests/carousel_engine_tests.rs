use approx::assert_relative_eq;
use knp_site::api::{SiteEngine, SiteEngineConfig};
use knp_site::core::{MemberId, PageId, Route};
use knp_site::render::{HeadlessHost, PageFrame, SlideFrame};

fn ids(raw: &[u32]) -> Vec<MemberId> {
    raw.iter().copied().map(MemberId::new).collect()
}

fn home_engine(config: SiteEngineConfig) -> SiteEngine<HeadlessHost> {
    SiteEngine::new(HeadlessHost::default(), config).expect("engine init")
}

#[test]
fn home_carousel_uses_configured_order_not_roster_order() {
    let engine = home_engine(SiteEngineConfig::default());
    assert_eq!(engine.carousel_member_ids(), ids(&[1, 6, 7, 2, 5]).as_slice());
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(1)));
    assert!(engine.is_carousel_timer_running());
}

#[test]
fn engine_clock_drives_ticks_through_the_subset() {
    let mut engine = home_engine(SiteEngineConfig::default());
    let mut visited = Vec::new();
    for _ in 0..5 {
        engine.advance_time(4_000).expect("advance");
        visited.push(engine.carousel_active_member().expect("active member").get());
    }
    assert_eq!(visited, vec![6, 7, 2, 5, 1]);
}

#[test]
fn unknown_ids_are_skipped_and_empty_subset_renders_nothing() {
    let config = SiteEngineConfig::default().with_carousel_member_ids(ids(&[42, 3, 99]));
    let engine = home_engine(config);
    assert_eq!(engine.carousel_member_ids(), ids(&[3]).as_slice());
    assert!(!engine.is_carousel_timer_running());

    let config = SiteEngineConfig::default().with_carousel_member_ids(ids(&[100, 200]));
    let mut engine = home_engine(config);
    assert!(engine.carousel_member_ids().is_empty());
    assert!(!engine.is_carousel_timer_running());
    engine.advance_time(60_000).expect("advance");
    engine.render().expect("render");

    let frame = engine.host().last_frame.as_ref().expect("frame");
    let PageFrame::Home(home) = &frame.page else {
        panic!("expected home frame");
    };
    assert!(home.carousel.is_none());
    assert_eq!(home.featured_services.len(), 4);
}

#[test]
fn leaving_home_unmounts_carousel_and_returning_remounts_at_zero() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.advance_time(8_000).expect("advance");
    assert_eq!(engine.carousel_state().map(|s| s.active_index), Some(2));

    engine.navigate_from_menu(PageId::About).expect("navigate");
    assert_eq!(engine.carousel_state(), None);
    assert!(!engine.is_carousel_timer_running());
    engine.advance_time(100_000).expect("advance");

    engine.go_home().expect("home");
    let state = engine.carousel_state().expect("remounted");
    assert_eq!(state.active_index, 0);
    assert!(!state.is_paused);
    assert_eq!(engine.carousel_next_tick_at_ms(), Some(engine.now_ms() + 4_000));
}

#[test]
fn staying_on_home_keeps_running_carousel() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.advance_time(5_000).expect("advance");
    engine.go_home().expect("home");
    assert_eq!(engine.carousel_state().map(|s| s.active_index), Some(1));
    assert_eq!(engine.carousel_next_tick_at_ms(), Some(8_000));
}

#[test]
fn hover_pauses_and_select_still_applies() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.carousel_pointer_enter();
    engine.advance_time(20_000).expect("advance");
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(1)));

    engine.carousel_select(3).expect("select");
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(2)));

    engine.carousel_pointer_leave();
    engine.advance_time(4_000).expect("advance");
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(5)));
}

#[test]
fn select_out_of_range_is_rejected() {
    let mut engine = home_engine(SiteEngineConfig::default());
    assert!(engine.carousel_select(5).is_err());
}

#[test]
fn carousel_controls_are_no_ops_off_home() {
    let config = SiteEngineConfig::default().with_initial_path("/news");
    let mut engine = home_engine(config);
    engine.carousel_select(10).expect("no carousel, no error");
    engine.carousel_show_next();
    engine.carousel_pointer_enter();
    assert_eq!(engine.carousel_state(), None);
    assert_eq!(engine.click_carousel_member().expect("click"), None);
    assert_eq!(engine.route(), Route::News);
}

#[test]
fn clicking_active_card_opens_member_detail() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.advance_time(4_000).expect("advance");
    let selected = engine.click_carousel_member().expect("click");
    assert_eq!(selected, Some(MemberId::new(6)));
    assert_eq!(engine.route(), Route::MemberDetail(MemberId::new(6)));
    assert_eq!(engine.carousel_state(), None);
}

#[test]
fn reduced_motion_preference_stops_auto_advance() {
    let config = SiteEngineConfig::default().with_reduced_motion(true);
    let mut engine = home_engine(config);
    assert!(!engine.is_carousel_timer_running());
    engine.advance_time(40_000).expect("advance");
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(1)));

    engine.set_reduced_motion(false);
    assert!(engine.is_carousel_timer_running());
    engine.advance_time(4_000).expect("advance");
    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(6)));
}

#[test]
fn frame_carries_slide_transition_while_in_flight() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.advance_time(4_250).expect("advance");
    engine.render().expect("render");

    let frame = engine.host().last_frame.as_ref().expect("frame");
    let PageFrame::Home(home) = &frame.page else {
        panic!("expected home frame");
    };
    let carousel = home.carousel.as_ref().expect("carousel frame");
    assert_eq!(carousel.active_index, 1);
    assert_eq!(carousel.len, 5);
    assert_eq!(carousel.active.member_id, MemberId::new(6));
    let SlideFrame {
        outgoing, progress, ..
    } = carousel.transition.as_ref().expect("slide in flight");
    assert_eq!(outgoing.member_id, MemberId::new(1));
    assert_relative_eq!(*progress, 0.5);

    engine.advance_time(250).expect("advance");
    engine.render().expect("render");
    let frame = engine.host().last_frame.as_ref().expect("frame");
    let PageFrame::Home(home) = &frame.page else {
        panic!("expected home frame");
    };
    assert!(home.carousel.as_ref().expect("carousel").transition.is_none());
}

#[test]
fn maximal_clock_jump_catches_up_without_stalling() {
    let mut engine = home_engine(SiteEngineConfig::default());
    engine.advance_time(u64::MAX).expect("advance to end of clock");

    let ticks = u64::MAX / 4_000;
    let state = engine.carousel_state().expect("carousel on home");
    assert_eq!(state.active_index, (ticks % 5) as usize);
    assert!(!engine.is_carousel_timer_running());

    engine.advance_time(u64::MAX).expect("saturated clock");
    assert_eq!(engine.now_ms(), u64::MAX);
    assert_eq!(engine.carousel_state(), Some(state));
    engine.render().expect("render");
}

#[test]
fn interval_near_half_clock_fires_twice_then_stops() {
    let config = SiteEngineConfig::default().with_carousel_interval_ms(u64::MAX / 2);
    let mut engine = home_engine(config);
    engine.advance_time(u64::MAX).expect("advance to end of clock");

    assert_eq!(engine.carousel_active_member(), Some(MemberId::new(7)));
    assert!(!engine.is_carousel_timer_running());
    assert_eq!(engine.carousel_next_tick_at_ms(), None);
}
