use super::ScrollContainer;

/// Resolves a selector against the document.
pub trait AnchorDocument {
    /// Document offset of the first element matching `selector`, if any.
    /// Invalid selectors resolve to `None`.
    fn offset_top_of(&self, selector: &str) -> Option<f64>;
}

pub trait ClickEvent {
    fn prevent_default(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// `#` alone (or no href at all): default is suppressed, nothing else happens.
    Inert,
    Target(&'a str),
}

impl<'a> AnchorHref<'a> {
    pub fn classify(href: Option<&'a str>) -> Self {
        match href {
            None | Some("#") => AnchorHref::Inert,
            Some(h) => AnchorHref::Target(h),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnchorScroll {
    header_offset_px: f64,
}

impl AnchorScroll {
    pub fn new(header_offset_px: f64) -> Self {
        Self { header_offset_px }
    }

    /// Not clamped; the browser clamps negative tops to 0.
    pub fn target_top(&self, offset_top: f64) -> f64 {
        offset_top - self.header_offset_px
    }

    /// Suppresses the default jump, then scrolls the container to the target.
    /// Returns the requested scroll top, or `None` when nothing was scrolled.
    pub fn on_click<E, D, C>(
        &self,
        event: &E,
        href: Option<&str>,
        document: &D,
        container: Option<&C>,
    ) -> Option<f64>
    where
        E: ClickEvent + ?Sized,
        D: AnchorDocument + ?Sized,
        C: ScrollContainer + ?Sized,
    {
        event.prevent_default();
        let AnchorHref::Target(selector) = AnchorHref::classify(href) else {
            return None;
        };
        let offset = document.offset_top_of(selector)?;
        let container = container?;
        let top = self.target_top(offset);
        container.smooth_scroll_to(top);
        Some(top)
    }
}
