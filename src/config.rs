//! Page contract: element selectors and behavioral constants.
//!
//! Defaults match the site's templates. A page can override any subset by
//! embedding `<script type="application/json" id="site-ui-config">` with a
//! JSON object; missing fields keep their defaults.

use serde::Deserialize;

use crate::controls::{AnchorScroll, BackToTop, MenuToggle};
use crate::error::UiError;

/// Element id of the optional inline JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "site-ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub menu_button_id: String,
    pub nav_list_id: String,
    pub nav_link_selector: String,
    /// Marker class whose presence means "menu open".
    pub open_class: String,
    pub back_to_top_id: String,
    pub scroll_container_selector: String,
    pub anchor_selector: String,
    /// The button shows only when the container's scroll offset is strictly greater.
    pub back_to_top_threshold_px: f64,
    /// Subtracted from an anchor target's offset so the fixed header doesn't cover it.
    pub header_offset_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_button_id: "btn-menu".to_string(),
            nav_list_id: "navbar-lista".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            open_class: "active".to_string(),
            back_to_top_id: "btn-back-to-top".to_string(),
            scroll_container_selector: ".main-wrapper".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            back_to_top_threshold_px: 700.0,
            header_offset_px: 80.0,
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn menu_toggle(&self) -> MenuToggle {
        MenuToggle::new(self.open_class.clone())
    }

    pub fn back_to_top(&self) -> BackToTop {
        BackToTop::new(self.back_to_top_threshold_px)
    }

    pub fn anchor_scroll(&self) -> AnchorScroll {
        AnchorScroll::new(self.header_offset_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Visibility;

    #[test]
    fn defaults_match_page_contract() {
        let c = UiConfig::default();
        assert_eq!(c.menu_button_id, "btn-menu");
        assert_eq!(c.nav_list_id, "navbar-lista");
        assert_eq!(c.nav_link_selector, ".nav-link");
        assert_eq!(c.back_to_top_id, "btn-back-to-top");
        assert_eq!(c.scroll_container_selector, ".main-wrapper");
        assert_eq!(c.anchor_selector, r##"a[href^="#"]"##);
        assert_eq!(c.back_to_top_threshold_px, 700.0);
        assert_eq!(c.header_offset_px, 80.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = UiConfig::from_json(r#"{ "header_offset_px": 64, "open_class": "is-open" }"#)
            .expect("valid config");
        assert_eq!(c.header_offset_px, 64.0);
        assert_eq!(c.open_class, "is-open");
        assert_eq!(c.back_to_top_threshold_px, 700.0);
        assert_eq!(c.menu_button_id, "btn-menu");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = UiConfig::from_json("{ header_offset_px: }").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));

        let err = UiConfig::from_json(r#"{ "header_offset_px": "tall" }"#).unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn controllers_pick_up_overrides() {
        let c = UiConfig::from_json(r#"{ "back_to_top_threshold_px": 10, "header_offset_px": 0 }"#)
            .unwrap();
        assert_eq!(c.back_to_top().visibility_at(10.0), Visibility::Hidden);
        assert_eq!(c.back_to_top().visibility_at(10.5), Visibility::Shown);
        assert_eq!(c.anchor_scroll().target_top(250.0), 250.0);
    }
}
