//! Header chrome state: the search overlay, the mobile menu overlay and
//! its accordion, and the document scroll lock the two overlays share.
//!
//! The scroll lock is derived — the OR of both open flags. Nothing writes
//! the combined value directly, so closing one overlay while the other is
//! still open cannot unlock scrolling early. The header applies
//! [`ShellState::scroll_locked`] to the document in a single effect and
//! clears it again on unmount.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    search_open: bool,
    menu_open: bool,
    expanded: Option<&'static str>,
}

impl ShellState {
    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// The single expanded accordion selector, if any.
    pub fn expanded_section(&self) -> Option<&'static str> {
        self.expanded
    }

    pub fn is_expanded(&self, selector: &str) -> bool {
        self.expanded.map_or(false, |s| s == selector)
    }

    /// Whether background scrolling must be suspended.
    pub fn scroll_locked(&self) -> bool {
        self.search_open || self.menu_open
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Accordion toggle: tapping the expanded selector collapses it,
    /// tapping another replaces it (at most one open at a time).
    pub fn toggle_section(&mut self, selector: &'static str) {
        self.expanded = if self.expanded == Some(selector) {
            None
        } else {
            Some(selector)
        };
    }

    /// A leaf category was picked inside the mobile menu: the whole menu
    /// closes in addition to whatever the accordion was showing.
    pub fn leaf_selected(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_keeps_at_most_one_section_expanded() {
        let mut shell = ShellState::default();
        shell.toggle_section("woman");
        assert!(shell.is_expanded("woman"));

        shell.toggle_section("man");
        assert!(shell.is_expanded("man"));
        assert!(!shell.is_expanded("woman"));

        shell.toggle_section("man");
        assert_eq!(shell.expanded_section(), None);
    }

    #[test]
    fn leaf_selection_closes_the_menu() {
        let mut shell = ShellState::default();
        shell.open_menu();
        shell.toggle_section("woman");
        shell.leaf_selected();
        assert!(!shell.is_menu_open());
        assert!(!shell.scroll_locked());
    }

    #[test]
    fn scroll_lock_holds_until_both_overlays_close() {
        let mut shell = ShellState::default();
        shell.open_search();
        shell.open_menu();
        assert!(shell.scroll_locked());

        shell.close_search();
        assert!(shell.scroll_locked(), "menu still open, must stay locked");

        shell.close_menu();
        assert!(!shell.scroll_locked());
    }

    #[test]
    fn overlays_do_not_disturb_each_other() {
        let mut shell = ShellState::default();
        shell.open_search();
        shell.open_menu();
        shell.close_menu();
        assert!(shell.is_search_open());
        assert!(shell.scroll_locked());
    }
}
