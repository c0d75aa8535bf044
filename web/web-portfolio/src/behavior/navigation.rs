use anyhow::Result;
use web_sys::Element;

use crate::config::*;
use crate::dom;

pub fn init_navigation() -> Result<()> {
    match (dom::query(NAV_TOGGLE)?, dom::query(NAV_LINKS)?) {
        (Some(toggle), Some(links)) => bind_menu_toggle(toggle, links)?,
        _ => log::debug!("no collapsible menu on this page"),
    }

    if let Some(nav) = dom::query(NAV)? {
        bind_nav_backdrop(nav)?;
    }
    Ok(())
}

fn bind_menu_toggle(toggle: Element, links: Element) -> Result<()> {
    {
        let menu_toggle = toggle.clone();
        let links = links.clone();
        dom::listen(&toggle, "click", move |_| {
            _ = links.class_list().toggle(ACTIVE_CLASS);
            _ = menu_toggle.class_list().toggle(ACTIVE_CLASS);
        })?;
    }

    // picking a destination closes the menu
    for link in dom::query_all(NAV_LINK_ANCHORS)? {
        let toggle = toggle.clone();
        let links = links.clone();
        dom::listen(&link, "click", move |_| {
            _ = links.class_list().remove_1(ACTIVE_CLASS);
            _ = toggle.class_list().remove_1(ACTIVE_CLASS);
        })?;
    }
    Ok(())
}

fn bind_nav_backdrop(nav: Element) -> Result<()> {
    let window = dom::window_handle()?;
    let scrolled = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let offset = scrolled.scroll_y().unwrap_or_default();
        let (background, shadow) = if offset > NAV_SOLID_AFTER {
            (NAV_SOLID_BACKGROUND, NAV_SOLID_SHADOW)
        } else {
            (NAV_CLEAR_BACKGROUND, NAV_CLEAR_SHADOW)
        };
        if let Err(e) = dom::set_style(&nav, "background", background)
            .and_then(|_| dom::set_style(&nav, "box-shadow", shadow))
        {
            log::error!("restyle nav error: {e}");
        }
    })
}
