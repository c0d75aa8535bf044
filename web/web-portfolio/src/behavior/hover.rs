use anyhow::Result;

use crate::config::*;
use crate::dom;

pub fn init_hover_effects() -> Result<()> {
    hover_style(SKILL_TAGS, "transform", "translateY(-3px)", "translateY(0)")?;
    hover_style(
        HOVER_CARDS,
        "box-shadow",
        "0 20px 40px rgba(99, 102, 241, 0.12)",
        "0 2px 12px rgba(0, 0, 0, 0.04)",
    )
}

fn hover_style(
    selector: &str,
    property: &'static str,
    enter: &'static str,
    leave: &'static str,
) -> Result<()> {
    for element in dom::query_all(selector)? {
        for (event, value) in [("mouseenter", enter), ("mouseleave", leave)] {
            let target = element.clone();
            dom::listen(&element, event, move |_| {
                if let Err(e) = dom::set_style(&target, property, value) {
                    log::error!("hover style error: {e}");
                }
            })?;
        }
    }
    Ok(())
}
