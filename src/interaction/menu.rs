use serde::{Deserialize, Serialize};

use crate::core::{PageId, Route};

/// Static navigation bar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub page: PageId,
    pub route: Route,
    pub label: &'static str,
}

/// Navigation bar items in display order.
pub const NAVIGATION_ITEMS: [NavigationItem; 6] = [
    NavigationItem {
        page: PageId::Home,
        route: Route::Home,
        label: "홈",
    },
    NavigationItem {
        page: PageId::About,
        route: Route::About,
        label: "회사소개",
    },
    NavigationItem {
        page: PageId::Services,
        route: Route::Services,
        label: "업무분야",
    },
    NavigationItem {
        page: PageId::Members,
        route: Route::Members,
        label: "구성원",
    },
    NavigationItem {
        page: PageId::News,
        route: Route::News,
        label: "뉴스/소식",
    },
    NavigationItem {
        page: PageId::Location,
        route: Route::Location,
        label: "오시는길",
    },
];

/// Rendered menu entry with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub page: PageId,
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// Menu entries for the desktop and mobile variants; the entry matching the
/// current page's menu key is active.
#[must_use]
pub fn menu_entries(current: PageId) -> Vec<MenuEntry> {
    let highlighted = current.menu_key();
    NAVIGATION_ITEMS
        .iter()
        .map(|item| MenuEntry {
            page: item.page,
            label: item.label.to_owned(),
            path: item.route.path(),
            active: item.page == highlighted,
        })
        .collect()
}

/// Open/closed state of the mobile navigation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobileMenuState {
    is_open: bool,
}

impl MobileMenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Returns `true` when the state changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        let changed = self.is_open != open;
        self.is_open = open;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }
}
