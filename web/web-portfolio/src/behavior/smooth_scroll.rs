use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::*;
use crate::dom;

pub fn init_smooth_scroll() -> Result<()> {
    for anchor in dom::query_all(IN_PAGE_ANCHORS)? {
        let href_source = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(target) = href_source.get_attribute("href") else {
                return;
            };
            if target == "#" {
                return;
            }
            if let Err(e) = scroll_to_section(&target) {
                log::debug!("scroll to {target} skipped: {e}");
            }
        })?;
    }
    Ok(())
}

fn scroll_to_section(selector: &str) -> Result<()> {
    let Some(section) = dom::query(selector)? else {
        return Ok(());
    };
    let section: HtmlElement = section
        .dyn_into()
        .map_err(|_| anyhow!("{selector} is not an html element"))?;
    let nav_height = dom::query(NAV)?
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height())
        .unwrap_or_default();

    let options = ScrollToOptions::new();
    options.set_top((section.offset_top() - nav_height - SCROLL_GAP) as f64);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window_handle()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
