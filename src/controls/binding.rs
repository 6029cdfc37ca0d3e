use std::fmt;

use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Menu,
    BackToTop,
    Anchors,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Feature::Menu => "menu",
            Feature::BackToTop => "back_to_top",
            Feature::Anchors => "anchors",
        })
    }
}

/// Why a feature was not bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    NoMenuButton,
    NoNavList,
    NoBackToTopButton,
    NoScrollContainer,
}

impl Skip {
    /// A menu button without its list is a broken page, not an opt-out.
    pub fn is_warning(self) -> bool {
        matches!(self, Skip::NoNavList)
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Skip::NoMenuButton => "menu off: no menu button",
            Skip::NoNavList => "menu off: menu button present without nav list",
            Skip::NoBackToTopButton => "back_to_top off: no button",
            Skip::NoScrollContainer => "back_to_top off: no scroll container",
        })
    }
}

/// Elements looked up once at load. Generic so the existence guards can be
/// exercised without a DOM.
#[derive(Debug, Clone)]
pub struct PageElements<E, B, C> {
    pub menu_button: Option<E>,
    pub nav_list: Option<E>,
    pub back_to_top_button: Option<B>,
    pub scroll_container: Option<C>,
}

impl<E, B, C> PageElements<E, B, C> {
    /// Button and list, or why the menu is skipped.
    pub fn menu(&self) -> Result<(&E, &E), Skip> {
        match (&self.menu_button, &self.nav_list) {
            (None, _) => Err(Skip::NoMenuButton),
            (Some(_), None) => Err(Skip::NoNavList),
            (Some(button), Some(list)) => Ok((button, list)),
        }
    }

    pub fn back_to_top(&self) -> Result<(&B, &C), Skip> {
        match (&self.back_to_top_button, &self.scroll_container) {
            (None, _) => Err(Skip::NoBackToTopButton),
            (Some(_), None) => Err(Skip::NoScrollContainer),
            (Some(button), Some(container)) => Ok((button, container)),
        }
    }

    /// Anchors are bound whatever else is missing; without a container they
    /// only suppress the default jump.
    pub fn anchor_container(&self) -> Option<&C> {
        self.scroll_container.as_ref()
    }
}

/// Which features were attached at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindReport {
    pub menu: bool,
    pub nav_links: usize,
    pub back_to_top: bool,
    pub anchors: usize,
    pub failed: usize,
}

impl BindReport {
    /// Folds per-feature outcomes. A failure turns only its own feature off.
    pub fn collect(
        menu: Result<Option<usize>, UiError>,
        back_to_top: Result<bool, UiError>,
        anchors: Result<usize, UiError>,
    ) -> (Self, Vec<(Feature, UiError)>) {
        let mut report = Self::default();
        let mut failures = Vec::new();

        match menu {
            Ok(Some(nav_links)) => {
                report.menu = true;
                report.nav_links = nav_links;
            }
            Ok(None) => {}
            Err(e) => failures.push((Feature::Menu, e)),
        }
        match back_to_top {
            Ok(bound) => report.back_to_top = bound,
            Err(e) => failures.push((Feature::BackToTop, e)),
        }
        match anchors {
            Ok(n) => report.anchors = n,
            Err(e) => failures.push((Feature::Anchors, e)),
        }

        report.failed = failures.len();
        (report, failures)
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "on" } else { "off" };
        write!(
            f,
            "menu={} ({} links), back_to_top={}, anchors={}",
            on_off(self.menu),
            self.nav_links,
            on_off(self.back_to_top),
            self.anchors
        )?;
        if self.failed > 0 {
            write!(f, ", failed={}", self.failed)?;
        }
        Ok(())
    }
}
