use knp_site::core::{
    MemberId, PageId, Route, RouteRedirect, page_for_path, resolve_path,
};

fn roster_of_nine(id: MemberId) -> bool {
    (1..=9).contains(&id.get())
}

#[test]
fn declared_paths_resolve_to_their_pages() {
    let cases = [
        ("/", Route::Home),
        ("/about", Route::About),
        ("/services", Route::Services),
        ("/members", Route::Members),
        ("/members/7", Route::MemberDetail(MemberId::new(7))),
        ("/news", Route::News),
        ("/location", Route::Location),
    ];
    for (path, expected) in cases {
        let resolved = resolve_path(path, roster_of_nine);
        assert_eq!(resolved.route, expected, "path {path}");
        assert_eq!(resolved.redirect, None, "path {path}");
        assert_eq!(resolved.canonical_path(), path);
    }
}

#[test]
fn unknown_paths_redirect_home() {
    for path in ["/totally/unknown/path", "/contact", "/location/map"] {
        let resolved = resolve_path(path, roster_of_nine);
        assert_eq!(resolved.route, Route::Home, "path {path:?}");
        assert_eq!(resolved.redirect, Some(RouteRedirect::ToHome), "path {path:?}");
        assert_eq!(resolved.requested_path, path);
    }
}

#[test]
fn unknown_member_id_redirects_to_listing() {
    let resolved = resolve_path("/members/999", roster_of_nine);
    assert_eq!(resolved.route, Route::Members);
    assert_eq!(resolved.redirect, Some(RouteRedirect::ToMembers));
    assert_eq!(resolved.page(), PageId::Members);
}

#[test]
fn fractional_member_id_redirects_to_listing() {
    let resolved = resolve_path("/members/1.5", roster_of_nine);
    assert_eq!(resolved.route, Route::Members);
    assert_eq!(resolved.redirect, Some(RouteRedirect::ToMembers));
}

#[test]
fn member_detail_with_extra_segment_redirects_home() {
    let resolved = resolve_path("/members/3/extra", roster_of_nine);
    assert_eq!(resolved.route, Route::Home);
    assert_eq!(resolved.redirect, Some(RouteRedirect::ToHome));
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    let resolved = resolve_path("/services/?tab=2#service-3", roster_of_nine);
    assert_eq!(resolved.route, Route::Services);
    assert!(!resolved.is_redirect());

    let resolved = resolve_path("/members/2/", roster_of_nine);
    assert_eq!(resolved.route, Route::MemberDetail(MemberId::new(2)));
}

#[test]
fn menu_page_agrees_with_resolution_for_declared_paths() {
    for path in ["/", "/about", "/services", "/members", "/news", "/location"] {
        assert_eq!(page_for_path(path), resolve_path(path, roster_of_nine).page());
    }
}

#[test]
fn member_detail_highlights_members_menu_entry() {
    assert_eq!(PageId::MemberDetail.menu_key(), PageId::Members);
    assert_eq!(PageId::Services.menu_key(), PageId::Services);
}

#[test]
fn route_serializes_with_page_tag() {
    let json = serde_json::to_string(&Route::MemberDetail(MemberId::new(4)))
        .expect("route should serialize");
    assert_eq!(json, r#"{"page":"member-detail","member_id":4}"#);

    let json = serde_json::to_string(&Route::Home).expect("route should serialize");
    assert_eq!(json, r#"{"page":"home"}"#);
}
