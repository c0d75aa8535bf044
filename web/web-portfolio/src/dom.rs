use anyhow::{anyhow, Result};
use time::{OffsetDateTime, UtcOffset};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{window, Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window_handle() -> Result<Window> {
    window().ok_or(anyhow!("window not found"))
}

pub fn document() -> Result<Document> {
    window_handle()?
        .document()
        .ok_or(anyhow!("document not found"))
}

pub fn query(selector: &str) -> Result<Option<Element>> {
    document()?
        .query_selector(selector)
        .map_err(|e| anyhow!("query `{selector}` fail: {e:?}"))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| anyhow!("query all `{selector}` fail: {e:?}"))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach `handler` for the rest of the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("listen `{event}` fail: {e:?}"))?;
    cb.forget();
    Ok(())
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or(anyhow!("<{}> has no inline style", element.tag_name()))?
        .style()
        .set_property(property, value)
        .map_err(|e| anyhow!("set style {property} fail: {e:?}"))
}

/// The browser's UTC offset at `at`, so month labels match the viewer's calendar.
pub fn local_offset(at: OffsetDateTime) -> UtcOffset {
    let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
    let minutes = js_sys::Date::new(&JsValue::from_f64(millis)).get_timezone_offset();
    // getTimezoneOffset is positive west of UTC
    UtcOffset::from_whole_seconds(-(minutes as i32) * 60).unwrap_or(UtcOffset::UTC)
}
