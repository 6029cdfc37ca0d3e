use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::log;
use crate::controls::{AnchorDocument, ClickEvent, DisplayTarget, MenuElements, ScrollContainer};

#[wasm_bindgen]
extern "C" {
    // web-sys types `scrollTop` as i32, which truncates fractional offsets.
    #[wasm_bindgen(extends = Element)]
    type ScrollElement;

    #[wasm_bindgen(method, getter, js_name = scrollTop)]
    fn scroll_top(this: &ScrollElement) -> f64;
}

fn report(what: &str, res: Result<(), JsValue>) {
    if res.is_err() {
        log::debug(&format!("{what} rejected"));
    }
}

pub(super) struct DomMenu {
    pub(super) button: Element,
    pub(super) list: Element,
}

impl MenuElements for DomMenu {
    fn toggle_list_class(&self, class: &str) -> bool {
        let classes = self.list.class_list();
        classes
            .toggle(class)
            .unwrap_or_else(|_| classes.contains(class))
    }

    fn remove_list_class(&self, class: &str) {
        report(
            &format!("classList.remove({class})"),
            self.list.class_list().remove_1(class),
        );
    }

    fn set_button_attribute(&self, name: &str, value: &str) {
        report(
            &format!("setAttribute({name})"),
            self.button.set_attribute(name, value),
        );
    }
}

pub(super) struct DomScroll(pub(super) Element);

impl ScrollContainer for DomScroll {
    fn scroll_top(&self) -> f64 {
        self.0.unchecked_ref::<ScrollElement>().scroll_top()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&opts);
    }
}

pub(super) struct DomButton(pub(super) HtmlElement);

impl DisplayTarget for DomButton {
    fn set_display(&self, value: &str) {
        report(
            "style.display",
            self.0.style().set_property("display", value),
        );
    }
}

pub(super) struct DomDocument(pub(super) Document);

impl AnchorDocument for DomDocument {
    fn offset_top_of(&self, selector: &str) -> Option<f64> {
        let el = match self.0.query_selector(selector) {
            Ok(found) => found?,
            Err(_) => {
                log::debug(&format!("not a valid selector: {selector}"));
                return None;
            }
        };
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }
}

impl ClickEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}
