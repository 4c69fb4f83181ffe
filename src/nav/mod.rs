// nav - the header dropdown menu

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    /// Items without a route are inert
    pub route: Option<&'static str>,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Add Hotel",
        icon: "plus",
        route: Some("/hotel/new"),
    },
    NavItem {
        label: "My Hotels",
        icon: "hotel",
        route: None,
    },
    NavItem {
        label: "My Bookings",
        icon: "book-open-check",
        route: None,
    },
];

/// Open/closed state of one menu instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click on item `index`: closes the menu and returns where to navigate, if anywhere
    pub fn select(&mut self, index: usize) -> Option<&'static str> {
        let item = NAV_ITEMS.get(index)?;
        self.open = false;
        item.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.items().len(), 3);
    }

    #[test]
    fn test_toggle() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_add_hotel_navigates() {
        let mut menu = NavMenu::new();
        menu.open();
        assert_eq!(menu.select(0), Some("/hotel/new"));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_placeholder_items_are_inert() {
        let mut menu = NavMenu::new();
        menu.open();
        assert_eq!(menu.select(1), None);
        assert_eq!(menu.select(2), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_out_of_range_selection_keeps_menu_open() {
        let mut menu = NavMenu::new();
        menu.open();
        assert_eq!(menu.select(7), None);
        assert!(menu.is_open());
    }
}
