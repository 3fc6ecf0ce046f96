//! DOM Helpers

use wasm_bindgen::JsCast;

/// Nearest ancestor-or-self of the event target matching `selector`
pub fn closest_target(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    element.closest(selector).ok().flatten()
}

/// True when the click landed on the element the listener is bound to
pub fn is_self_target(ev: &web_sys::Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
