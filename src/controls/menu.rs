pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Access to the menu button and the navigation list.
pub trait MenuElements {
    /// Toggles `class` on the navigation list and returns whether it is now present.
    fn toggle_list_class(&self, class: &str) -> bool;
    fn remove_list_class(&self, class: &str);
    fn set_button_attribute(&self, name: &str, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn aria_value(self) -> &'static str {
        match self {
            MenuState::Open => "true",
            MenuState::Closed => "false",
        }
    }
}

/// Mobile navigation toggle. The open state lives in the list's marker class;
/// `aria-expanded` on the button is rewritten after every change.
#[derive(Debug, Clone)]
pub struct MenuToggle {
    open_class: String,
}

impl MenuToggle {
    pub fn new(open_class: impl Into<String>) -> Self {
        Self {
            open_class: open_class.into(),
        }
    }

    pub fn on_button_click<E: MenuElements + ?Sized>(&self, els: &E) -> MenuState {
        let state = MenuState::from_open(els.toggle_list_class(&self.open_class));
        els.set_button_attribute(ARIA_EXPANDED, state.aria_value());
        state
    }

    /// Navigation links always close the menu, whatever its current state.
    pub fn on_link_click<E: MenuElements + ?Sized>(&self, els: &E) -> MenuState {
        els.remove_list_class(&self.open_class);
        els.set_button_attribute(ARIA_EXPANDED, MenuState::Closed.aria_value());
        MenuState::Closed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    #[derive(Default)]
    struct FakeMenu {
        classes: RefCell<BTreeSet<String>>,
        attrs: RefCell<BTreeMap<String, String>>,
    }

    impl FakeMenu {
        fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn aria(&self) -> Option<String> {
            self.attrs.borrow().get(ARIA_EXPANDED).cloned()
        }
    }

    impl MenuElements for FakeMenu {
        fn toggle_list_class(&self, class: &str) -> bool {
            let mut classes = self.classes.borrow_mut();
            if classes.remove(class) {
                false
            } else {
                classes.insert(class.to_string());
                true
            }
        }

        fn remove_list_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }

        fn set_button_attribute(&self, name: &str, value: &str) {
            self.attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
    }

    #[test]
    fn button_clicks_alternate_and_aria_mirrors_class() {
        let menu = MenuToggle::new("active");
        let els = FakeMenu::default();

        for i in 0..9 {
            let state = menu.on_button_click(&els);
            let expect_open = i % 2 == 0;
            assert_eq!(state, MenuState::from_open(expect_open));
            assert_eq!(els.has("active"), expect_open);
            assert_eq!(els.aria().as_deref(), Some(state.aria_value()));
            assert_eq!(
                els.aria().as_deref() == Some("true"),
                els.has("active"),
                "aria-expanded must equal class presence"
            );
        }
    }

    #[test]
    fn aria_follows_preexisting_class() {
        let menu = MenuToggle::new("active");
        let els = FakeMenu::default();
        els.classes.borrow_mut().insert("active".to_string());

        assert_eq!(menu.on_button_click(&els), MenuState::Closed);
        assert_eq!(els.aria().as_deref(), Some("false"));
    }

    #[test]
    fn link_click_forces_closed_and_is_idempotent() {
        let menu = MenuToggle::new("active");
        let els = FakeMenu::default();

        menu.on_button_click(&els);
        assert!(els.has("active"));

        for _ in 0..3 {
            assert_eq!(menu.on_link_click(&els), MenuState::Closed);
            assert!(!els.has("active"));
            assert_eq!(els.aria().as_deref(), Some("false"));
        }

        // Reopening after a forced close still toggles normally.
        assert_eq!(menu.on_button_click(&els), MenuState::Open);
        assert_eq!(els.aria().as_deref(), Some("true"));
    }

    #[test]
    fn other_classes_are_left_alone() {
        let menu = MenuToggle::new("is-open");
        let els = FakeMenu::default();
        els.classes.borrow_mut().insert("navbar".to_string());

        menu.on_button_click(&els);
        menu.on_link_click(&els);
        assert!(els.has("navbar"));
        assert!(!els.has("is-open"));
    }
}
