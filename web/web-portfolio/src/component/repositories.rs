use std::rc::Rc;

use anyhow::Result;
use repo_panel::panel::*;
use yew::prelude::*;
use yew::suspense::*;

use crate::component::RepoCardView;
use crate::config::{self, REPO_CONTAINER_ID};
use crate::dom;

/// Replace the repository container's content with the live panel.
///
/// The markup already inside the container stays visible while the listing
/// loads.
pub fn mount_repo_panel() -> Result<()> {
    let Some(container) = dom::document()?.get_element_by_id(REPO_CONTAINER_ID) else {
        log::warn!("#{REPO_CONTAINER_ID} not found, repositories not loaded");
        return Ok(());
    };

    let props = RepoPanelProps {
        config: Rc::new(config::panel_config(&container)),
        loading: AttrValue::from(container.inner_html()),
    };
    container.set_inner_html("");
    yew::Renderer::<RepoPanel>::with_root_and_props(container, props).render();
    Ok(())
}

#[derive(PartialEq, Properties)]
pub struct RepoPanelProps {
    pub config: Rc<PanelConfig>,
    #[prop_or_default]
    pub loading: AttrValue,
}

#[function_component]
pub fn RepoPanel(props: &RepoPanelProps) -> Html {
    let fallback = Html::from_html_unchecked(props.loading.clone());

    html! {
        <Suspense {fallback}>
            <RepoPanelContent config={props.config.clone()} />
        </Suspense>
    }
}

#[derive(PartialEq, Properties)]
struct RepoPanelContentProps {
    config: Rc<PanelConfig>,
}

#[function_component]
fn RepoPanelContent(props: &RepoPanelContentProps) -> HtmlResult {
    let view = use_panel_view(props.config.clone())?;

    Ok(html! { <PanelViewContent {view} /> })
}

#[derive(PartialEq, Properties)]
struct PanelViewContentProps {
    view: Rc<PanelView>,
}

#[function_component]
fn PanelViewContent(props: &PanelViewContentProps) -> Html {
    match &*props.view {
        PanelView::Cards(cards) => cards
            .iter()
            .map(|card| html! { <RepoCardView key={card.href.clone()} card={card.clone()} /> })
            .collect::<Html>(),
        PanelView::Empty => html! {
            <div class="no-repos">{EMPTY_MESSAGE}</div>
        },
        PanelView::Unavailable { profile_url } => html! {
            <div class="no-repos">
                <p>{UNAVAILABLE_MESSAGE}</p>
                <a href={profile_url.clone()} target="_blank" class="btn btn-outline" style="margin-top: 16px;">
                    {PROFILE_LINK_TEXT}
                </a>
            </div>
        },
    }
}

#[hook]
fn use_panel_view(config: Rc<PanelConfig>) -> SuspensionResult<Rc<PanelView>> {
    let view: UseStateHandle<Option<Rc<PanelView>>> = use_state(|| None);
    // save the handle to prevent refresh component
    let state_handle = use_mut_ref(|| None);

    match &*view {
        Some(v) => Ok(v.clone()),
        None => {
            let (s, handle) = Suspension::new();
            *state_handle.borrow_mut() = Some(handle);

            let view = view.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = load_panel(&config, dom::local_offset).await;
                view.set(Some(Rc::new(loaded)));
                *state_handle.borrow_mut() = None;
            });

            Err(s)
        }
    }
}
