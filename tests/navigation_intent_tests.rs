use knp_site::SiteError;
use knp_site::api::{NavigationIntent, NavigationOptions};
use knp_site::core::{MemberId, PageId, Route, ServiceId};

#[test]
fn service_intent_matches_wire_payload() {
    let intent = NavigationIntent::to_service_section(ServiceId::new(3).expect("valid id"));
    let json = serde_json::to_string(&intent).expect("serialize intent");
    assert_eq!(json, r#"{"page":"services","options":{"serviceId":3}}"#);

    let parsed = NavigationIntent::from_json_str(&json).expect("parse intent");
    assert_eq!(parsed, intent);
}

#[test]
fn plain_intent_omits_options() {
    let intent = NavigationIntent::to(PageId::News);
    let json = serde_json::to_string(&intent).expect("serialize intent");
    assert_eq!(json, r#"{"page":"news"}"#);

    for payload in [
        r#"{"page":"news"}"#,
        r#"{"page":"news","options":null}"#,
        r#"{"page":"news","options":{}}"#,
    ] {
        assert_eq!(
            NavigationIntent::from_json_str(payload).expect("parse intent"),
            intent
        );
    }
}

#[test]
fn member_intent_round_trips_through_member_id() {
    let intent = NavigationIntent::to_member(MemberId::new(5));
    let json = serde_json::to_string(&intent).expect("serialize intent");
    assert_eq!(json, r#"{"page":"member-detail","options":{"memberId":5}}"#);
    assert_eq!(intent.target_route(), Route::MemberDetail(MemberId::new(5)));
}

#[test]
fn service_id_is_only_accepted_for_services() {
    let err = NavigationIntent::from_json_str(r#"{"page":"about","options":{"serviceId":1}}"#)
        .expect_err("service id on about must be rejected");
    assert!(matches!(err, SiteError::InvalidIntent(_)));

    let options = NavigationOptions {
        service_id: Some(ServiceId::new(2).expect("valid id")),
        member_id: None,
    };
    assert!(NavigationIntent::new(PageId::Home, options).is_err());
    assert!(NavigationIntent::new(PageId::Services, options).is_ok());
}

#[test]
fn member_id_is_only_accepted_for_member_detail() {
    let options = NavigationOptions {
        service_id: None,
        member_id: Some(MemberId::new(1)),
    };
    assert!(NavigationIntent::new(PageId::Members, options).is_err());
    assert!(NavigationIntent::new(PageId::MemberDetail, options).is_ok());
}

#[test]
fn zero_or_malformed_service_id_is_rejected() {
    for payload in [
        r#"{"page":"services","options":{"serviceId":0}}"#,
        r#"{"page":"services","options":{"serviceId":-2}}"#,
        r#"{"page":"services","options":{"serviceId":"3"}}"#,
        r#"{"page":"services","options":{"sectionId":3}}"#,
        r#"{"page":"pricing"}"#,
    ] {
        let err = NavigationIntent::from_json_str(payload).expect_err(payload);
        assert!(matches!(err, SiteError::InvalidIntent(_)), "payload {payload}");
    }
}

#[test]
fn member_detail_without_id_targets_listing_route() {
    assert_eq!(
        NavigationIntent::to(PageId::MemberDetail).target_route(),
        Route::Members
    );
}
