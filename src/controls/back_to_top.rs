use super::ScrollContainer;

/// Something whose CSS `display` can be set (the back-to-top button).
pub trait DisplayTarget {
    fn set_display(&self, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Shown => "flex",
            Visibility::Hidden => "none",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BackToTop {
    threshold_px: f64,
}

impl BackToTop {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn visibility_at(&self, scroll_top: f64) -> Visibility {
        if scroll_top > self.threshold_px {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// Runs on every scroll event; unthrottled.
    pub fn on_scroll<C, B>(&self, container: &C, button: &B) -> Visibility
    where
        C: ScrollContainer + ?Sized,
        B: DisplayTarget + ?Sized,
    {
        let v = self.visibility_at(container.scroll_top());
        button.set_display(v.css_display());
        v
    }

    pub fn on_click<C: ScrollContainer + ?Sized>(&self, container: &C) {
        container.smooth_scroll_to(0.0);
    }
}
