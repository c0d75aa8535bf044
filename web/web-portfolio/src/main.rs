pub(crate) mod behavior;
pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod dom;

use anyhow::Result;

type Initializer = fn() -> Result<()>;

const INITIALIZERS: [(&str, Initializer); 5] = [
    ("navigation", behavior::init_navigation),
    ("scroll reveal", behavior::init_scroll_reveal),
    ("smooth scroll", behavior::init_smooth_scroll),
    ("hover effects", behavior::init_hover_effects),
    ("repositories", component::mount_repo_panel),
];

fn init_page() {
    for (name, init) in INITIALIZERS {
        if let Err(e) = init() {
            log::error!("init {name} error: {e}");
        }
    }
}

fn when_ready(init: fn()) -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }

    let mut pending = Some(init);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(init) = pending.take() {
            init();
        }
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    if let Err(e) = when_ready(init_page) {
        log::error!("register page init error: {e}");
    }
}
