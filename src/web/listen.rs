use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::UiError;

/// Attaches `handler` for the lifetime of the page; listeners are never
/// removed, so the closure is leaked.
pub(super) fn listen<F>(
    target: &web_sys::EventTarget,
    event: &str,
    handler: F,
) -> Result<(), UiError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|_| UiError::Dom(format!("addEventListener({event}) failed")))?;
    cb.forget();
    Ok(())
}

/// Elements matching `selector`, in document order.
pub(super) fn query_all(
    document: &web_sys::Document,
    selector: &str,
) -> Result<Vec<web_sys::Element>, UiError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| UiError::Dom(format!("querySelectorAll({selector}) failed")))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect())
}
