use knp_site::SiteError;
use knp_site::content::{
    FEATURED_SERVICE_COUNT, NewsFeed, ServiceCatalog, SiteContent, StaffRoster,
};
use knp_site::core::{MemberId, ServiceId};

#[test]
fn builtin_content_is_consistent() {
    let content = SiteContent::builtin().expect("builtin content");
    assert_eq!(content.roster.len(), 9);
    assert_eq!(content.catalog.len(), 6);
    assert_eq!(content.news.len(), 2);
    assert!(content.office.is_some());

    let member_ids: Vec<u32> = content.roster.iter().map(|member| member.id.get()).collect();
    assert_eq!(member_ids, (1..=9).collect::<Vec<_>>());
}

#[test]
fn ordered_subset_follows_requested_order() {
    let roster = StaffRoster::builtin();
    let ids: Vec<MemberId> = [1, 6, 7, 2, 5, 6, 404]
        .into_iter()
        .map(MemberId::new)
        .collect();
    let picked: Vec<u32> = roster
        .ordered_subset(&ids)
        .iter()
        .map(|member| member.id.get())
        .collect();
    assert_eq!(picked, vec![1, 6, 7, 2, 5]);
    assert!(roster.ordered_subset(&[]).is_empty());
}

#[test]
fn featured_services_are_the_first_four_entries() {
    let catalog = ServiceCatalog::builtin().expect("builtin catalog");
    let featured: Vec<u32> = catalog.featured().map(|entry| entry.id.get()).collect();
    assert_eq!(featured.len(), FEATURED_SERVICE_COUNT);
    assert_eq!(featured, vec![1, 2, 3, 4]);

    let entry = catalog
        .get(ServiceId::new(3).expect("valid id"))
        .expect("service 3");
    assert_eq!(entry.anchor_key().as_str(), "service-3");
    assert!(!entry.service_items.is_empty());
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let roster = StaffRoster::builtin();
    let mut members: Vec<_> = roster.iter().cloned().collect();
    members.push(members[0].clone());
    let err = StaffRoster::new(members).expect_err("duplicate member id");
    assert!(matches!(err, SiteError::InvalidData(_)));

    let catalog = ServiceCatalog::builtin().expect("builtin catalog");
    let mut entries: Vec<_> = catalog.iter().cloned().collect();
    entries.push(entries[2].clone());
    assert!(ServiceCatalog::new(entries).is_err());
}

#[test]
fn news_is_sorted_newest_first_with_korean_dates() {
    let feed = NewsFeed::builtin().expect("builtin news");
    let first = &feed.items()[0];
    assert_eq!(first.display_date(), "2025년 9월 5일");
    assert!(feed.items()[0].published_on >= feed.items()[1].published_on);

    let mut reversed: Vec<_> = feed.items().to_vec();
    reversed.reverse();
    assert_eq!(NewsFeed::new(reversed), feed);
}

#[test]
fn content_roundtrips_through_json() {
    let content = SiteContent::builtin().expect("builtin content");
    let json = serde_json::to_string(&content).expect("content should serialize");
    let restored: SiteContent = serde_json::from_str(&json).expect("content should deserialize");
    assert_eq!(restored, content);
}

#[test]
fn host_supplied_catalog_rejects_zero_service_id() {
    let json = r#"[{"id":0,"title":"x","description":"y","highlights":[],"service_items":[]}]"#;
    assert!(serde_json::from_str::<ServiceCatalog>(json).is_err());
}
