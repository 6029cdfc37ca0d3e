use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{UiConfig, CONFIG_SCRIPT_ID};
use crate::controls::{BindReport, PageElements, Skip};
use crate::error::UiError;

mod dom;
mod listen;
mod log;

use dom::{DomButton, DomDocument, DomMenu, DomScroll};
use listen::{listen, query_all};

type DomPage = PageElements<Element, HtmlElement, Rc<DomScroll>>;

/// Binds every control whose elements are present on the page.
pub fn start() {
    match bind_all() {
        Ok(report) => log::debug(&format!("bound: {report}")),
        Err(e) => log::error(&format!("bind failed: {e}")),
    }
}

fn bind_all() -> Result<BindReport, UiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(UiError::NoDocument)?;
    let config = load_config(&document);
    let page = find_elements(&document, &config);

    let menu = match page.menu() {
        Ok((button, list)) => bind_menu(&document, &config, button, list).map(Some),
        Err(skip) => {
            note_skip(skip);
            Ok(None)
        }
    };
    let back_to_top = match page.back_to_top() {
        Ok((button, container)) => bind_back_to_top(&config, button, container).map(|()| true),
        Err(skip) => {
            note_skip(skip);
            Ok(false)
        }
    };
    let anchors = bind_anchors(&document, &config, page.anchor_container().cloned());

    let (report, failures) = BindReport::collect(menu, back_to_top, anchors);
    for (feature, e) in failures {
        log::error(&format!("{feature} disabled: {e}"));
    }
    Ok(report)
}

fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn(&format!("{e}; using defaults"));
            UiConfig::default()
        }
    }
}

fn find_elements(document: &Document, config: &UiConfig) -> DomPage {
    let scroll_container = match document.query_selector(&config.scroll_container_selector) {
        Ok(found) => found.map(|el| Rc::new(DomScroll(el))),
        Err(_) => {
            log::warn(&format!(
                "bad scroll container selector: {}",
                config.scroll_container_selector
            ));
            None
        }
    };

    PageElements {
        menu_button: document.get_element_by_id(&config.menu_button_id),
        nav_list: document.get_element_by_id(&config.nav_list_id),
        back_to_top_button: document
            .get_element_by_id(&config.back_to_top_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        scroll_container,
    }
}

fn note_skip(skip: Skip) {
    if skip.is_warning() {
        log::warn(&skip.to_string());
    } else {
        log::debug(&skip.to_string());
    }
}

/// Returns the number of nav links bound.
fn bind_menu(
    document: &Document,
    config: &UiConfig,
    button: &Element,
    list: &Element,
) -> Result<usize, UiError> {
    // Resolve links first so a bad selector leaves the menu entirely unbound.
    let links = query_all(document, &config.nav_link_selector)?;

    let els = Rc::new(DomMenu {
        button: button.clone(),
        list: list.clone(),
    });
    let toggle = Rc::new(config.menu_toggle());

    {
        let els = els.clone();
        let toggle = toggle.clone();
        listen(button, "click", move |_| {
            toggle.on_button_click(&*els);
        })?;
    }

    for link in &links {
        let els = els.clone();
        let toggle = toggle.clone();
        listen(link, "click", move |_| {
            toggle.on_link_click(&*els);
        })?;
    }
    Ok(links.len())
}

fn bind_back_to_top(
    config: &UiConfig,
    button: &HtmlElement,
    container: &Rc<DomScroll>,
) -> Result<(), UiError> {
    let btt = config.back_to_top();
    let display = DomButton(button.clone());

    {
        let scrolled = container.clone();
        listen(&container.0, "scroll", move |_| {
            btt.on_scroll(&*scrolled, &display);
        })?;
    }

    let container = container.clone();
    listen(button, "click", move |_| {
        btt.on_click(&*container);
    })
}

fn bind_anchors(
    document: &Document,
    config: &UiConfig,
    container: Option<Rc<DomScroll>>,
) -> Result<usize, UiError> {
    let anchors = query_all(document, &config.anchor_selector)?;
    let scroll = config.anchor_scroll();
    let doc = Rc::new(DomDocument(document.clone()));

    for anchor in &anchors {
        let doc = doc.clone();
        let container = container.clone();
        let el: Element = anchor.clone();
        listen(anchor, "click", move |ev| {
            let href = el.get_attribute("href");
            if scroll
                .on_click(&ev, href.as_deref(), &*doc, container.as_deref())
                .is_none()
            {
                if let Some(h) = href.as_deref().filter(|h| *h != "#") {
                    log::debug(&format!("no scroll for {h}"));
                }
            }
        })?;
    }
    Ok(anchors.len())
}
