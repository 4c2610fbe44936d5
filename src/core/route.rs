use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MemberId, PageId};

/// Concrete destination, one per declared path shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "page", content = "member_id", rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Services,
    Members,
    MemberDetail(MemberId),
    News,
    Location,
}

impl Route {
    #[must_use]
    pub const fn page(self) -> PageId {
        match self {
            Self::Home => PageId::Home,
            Self::About => PageId::About,
            Self::Services => PageId::Services,
            Self::Members => PageId::Members,
            Self::MemberDetail(_) => PageId::MemberDetail,
            Self::News => PageId::News,
            Self::Location => PageId::Location,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::MemberDetail(id) => format!("/members/{id}"),
            other => other.page_path().to_owned(),
        }
    }

    /// Static path for pages reachable without parameters.
    ///
    /// Member detail has no parameterless path and falls back to the listing.
    #[must_use]
    pub const fn page_path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Services => "/services",
            Self::Members | Self::MemberDetail(_) => "/members",
            Self::News => "/news",
            Self::Location => "/location",
        }
    }

    #[must_use]
    pub const fn member_id(self) -> Option<MemberId> {
        match self {
            Self::MemberDetail(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Why a requested path was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteRedirect {
    /// Path outside the declared set.
    ToHome,
    /// `/members/{id}` where `id` is non-numeric or unknown.
    ToMembers,
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub route: Route,
    pub requested_path: String,
    pub redirect: Option<RouteRedirect>,
}

impl ResolvedRoute {
    #[must_use]
    pub fn page(&self) -> PageId {
        self.route.page()
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    #[must_use]
    pub fn canonical_path(&self) -> String {
        self.route.path()
    }
}

/// Resolves a request path to a route.
///
/// Query strings and fragments are ignored and one trailing slash is
/// tolerated. Segment matching is exact and case-sensitive. `member_exists`
/// decides whether `/members/{id}` has a detail page; when it does not, the
/// members listing is returned instead of an empty page.
pub fn resolve_path(path: &str, member_exists: impl Fn(MemberId) -> bool) -> ResolvedRoute {
    let (route, redirect) = match_path(path, member_exists);
    ResolvedRoute {
        route,
        requested_path: path.to_owned(),
        redirect,
    }
}

/// Page identifier for a path, ignoring member-detail validation.
///
/// This is the menu-highlight derivation: it only inspects the first segment.
#[must_use]
pub fn page_for_path(path: &str) -> PageId {
    match first_segment(strip_suffixes(path)) {
        "about" => PageId::About,
        "services" => PageId::Services,
        "members" => PageId::Members,
        "news" => PageId::News,
        "location" => PageId::Location,
        _ => PageId::Home,
    }
}

fn match_path(
    path: &str,
    member_exists: impl Fn(MemberId) -> bool,
) -> (Route, Option<RouteRedirect>) {
    let trimmed = strip_suffixes(path);
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return (Route::Home, None);
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return (Route::Home, Some(RouteRedirect::ToHome));
    }

    match segments.as_slice() {
        ["about"] => (Route::About, None),
        ["services"] => (Route::Services, None),
        ["members"] => (Route::Members, None),
        ["members", raw_id] => match parse_member_id(raw_id) {
            Some(id) if member_exists(id) => (Route::MemberDetail(id), None),
            _ => (Route::Members, Some(RouteRedirect::ToMembers)),
        },
        ["news"] => (Route::News, None),
        ["location"] => (Route::Location, None),
        _ => (Route::Home, Some(RouteRedirect::ToHome)),
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn first_segment(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/').next().unwrap_or_default()
}

fn parse_member_id(raw: &str) -> Option<MemberId> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().map(MemberId::new)
}

#[cfg(test)]
mod tests {
    use super::{Route, RouteRedirect, page_for_path, resolve_path};
    use crate::core::{MemberId, PageId};

    fn known(id: MemberId) -> bool {
        (1..=9).contains(&id.get())
    }

    #[test]
    fn declared_paths_resolve_without_redirect() {
        for (path, route) in [
            ("/", Route::Home),
            ("", Route::Home),
            ("/about", Route::About),
            ("/services", Route::Services),
            ("/members", Route::Members),
            ("/members/3", Route::MemberDetail(MemberId::new(3))),
            ("/news", Route::News),
            ("/location", Route::Location),
        ] {
            let resolved = resolve_path(path, known);
            assert_eq!(resolved.route, route, "path {path}");
            assert_eq!(resolved.redirect, None, "path {path}");
        }
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        assert_eq!(resolve_path("/about/", known).route, Route::About);
        assert_eq!(resolve_path("/services?x=1", known).route, Route::Services);
        assert_eq!(resolve_path("/news#top", known).route, Route::News);
        assert_eq!(
            resolve_path("/members/2/?tab=bio", known).route,
            Route::MemberDetail(MemberId::new(2))
        );
    }

    #[test]
    fn unknown_member_ids_fall_back_to_listing() {
        for path in ["/members/999", "/members/abc", "/members/-1", "/members/+4"] {
            let resolved = resolve_path(path, known);
            assert_eq!(resolved.route, Route::Members, "path {path}");
            assert_eq!(resolved.redirect, Some(RouteRedirect::ToMembers));
        }
    }

    #[test]
    fn undeclared_shapes_fall_back_to_home() {
        for path in [
            "/totally/unknown/path",
            "/About",
            "/about/team",
            "/members/1/extra",
            "//services",
            "/services//",
        ] {
            let resolved = resolve_path(path, known);
            assert_eq!(resolved.route, Route::Home, "path {path}");
            assert_eq!(resolved.redirect, Some(RouteRedirect::ToHome), "path {path}");
        }
    }

    #[test]
    fn menu_page_only_inspects_first_segment() {
        assert_eq!(page_for_path("/members/999"), PageId::Members);
        assert_eq!(page_for_path("/services?x"), PageId::Services);
        assert_eq!(page_for_path("/unknown"), PageId::Home);
    }
}
