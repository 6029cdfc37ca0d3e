//! Host-testable controller logic.
//!
//! Each controller reads and writes the page only through the small traits
//! below; the wasm `web` module implements them for real DOM elements.

mod anchor;
mod back_to_top;
mod binding;
mod menu;

pub use anchor::{AnchorDocument, AnchorHref, AnchorScroll, ClickEvent};
pub use back_to_top::{BackToTop, DisplayTarget, Visibility};
pub use binding::{BindReport, Feature, PageElements, Skip};
pub use menu::{MenuElements, MenuState, MenuToggle, ARIA_EXPANDED};

/// The designated scrollable element used instead of the document.
pub trait ScrollContainer {
    fn scroll_top(&self) -> f64;

    /// Fire-and-forget native smooth scroll; a new request supersedes one in flight.
    fn smooth_scroll_to(&self, top: f64);
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};

    use super::ScrollContainer;

    #[derive(Default)]
    pub(crate) struct FakeContainer {
        pub(crate) top: Cell<f64>,
        pub(crate) requests: RefCell<Vec<f64>>,
    }

    impl FakeContainer {
        pub(crate) fn at(top: f64) -> Self {
            Self {
                top: Cell::new(top),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollContainer for FakeContainer {
        fn scroll_top(&self) -> f64 {
            self.top.get()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }
}
