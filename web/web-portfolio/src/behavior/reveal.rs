use anyhow::{anyhow, Result};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::*;
use crate::dom;

/// Fade sections in the first time they scroll into view.
pub fn init_scroll_reveal() -> Result<()> {
    let targets = dom::query_all(REVEAL_TARGETS)?;

    let on_intersect = Closure::wrap(Box::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("create intersection observer fail: {e:?}"))?;
    on_intersect.forget();

    for target in &targets {
        target
            .class_list()
            .add_1(FADE_IN_CLASS)
            .map_err(|e| anyhow!("mark fade-in fail: {e:?}"))?;
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(())
}
