use repo_panel::card::RepoCard;
use yew::prelude::*;

const BOOK_ICON: &str = "M2 2.5A2.5 2.5 0 014.5 0h8.75a.75.75 0 01.75.75v12.5a.75.75 0 01-.75.75h-2.5a.75.75 0 110-1.5h1.75v-2h-8a1 1 0 00-.714 1.7.75.75 0 01-1.072 1.05A2.495 2.495 0 012 11.5v-9zm10.5-1V9h-8c-.356 0-.694.074-1 .208V2.5a1 1 0 011-1h8zM5 12.25v3.25a.25.25 0 00.4.2l1.45-1.087a.25.25 0 01.3 0L8.6 15.7a.25.25 0 00.4-.2v-3.25a.25.25 0 00-.25-.25h-3.5a.25.25 0 00-.25.25z";
const STAR_ICON: &str = "M8 .25a.75.75 0 01.673.418l1.882 3.815 4.21.612a.75.75 0 01.416 1.279l-3.046 2.97.719 4.192a.75.75 0 01-1.088.791L8 12.347l-3.766 1.98a.75.75 0 01-1.088-.79l.72-4.194L.818 6.374a.75.75 0 01.416-1.28l4.21-.611L7.327.668A.75.75 0 018 .25z";
const FORK_ICON: &str = "M5 3.25a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm0 2.122a2.25 2.25 0 10-1.5 0v.878A2.25 2.25 0 005.75 8.5h1.5v2.128a2.251 2.251 0 101.5 0V8.5h1.5a2.25 2.25 0 002.25-2.25v-.878a2.25 2.25 0 10-1.5 0v.878a.75.75 0 01-.75.75h-4.5A.75.75 0 015 6.25v-.878zm3.75 7.378a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm3-8.75a.75.75 0 100-1.5.75.75 0 000 1.5z";

#[derive(PartialEq, Properties)]
pub struct RepoCardViewProps {
    pub card: RepoCard,
}

#[function_component]
pub fn RepoCardView(props: &RepoCardViewProps) -> Html {
    let card = &props.card;

    let language = card.language.as_ref().map(|language| {
        html! {
            <span class="repo-language">
                <span class={classes!("language-dot", language.class.clone())}></span>
                {language.label.clone()}
            </span>
        }
    });

    html! {
        <a href={card.href.clone()} target="_blank" rel="noopener" class="github-repo-card">
            <div class="repo-header">
                <div class="repo-icon">
                    <Icon path={BOOK_ICON} />
                </div>
            </div>
            <h4 class="repo-name">{card.name.clone()}</h4>
            <p class="repo-description">{card.description.clone()}</p>
            <div class="repo-meta">
                {language}
                if let Some(stars) = card.stars {
                    <RepoStat icon={STAR_ICON} count={stars} />
                }
                if let Some(forks) = card.forks {
                    <RepoStat icon={FORK_ICON} count={forks} />
                }
                <span class="repo-stat">{format!("Updated {}", card.updated)}</span>
            </div>
        </a>
    }
}

#[derive(PartialEq, Properties)]
struct RepoStatProps {
    icon: &'static str,
    count: u64,
}

#[function_component]
fn RepoStat(props: &RepoStatProps) -> Html {
    html! {
        <span class="repo-stat">
            <Icon path={props.icon} />
            {props.count.to_string()}
        </span>
    }
}

#[derive(PartialEq, Properties)]
struct IconProps {
    path: &'static str,
}

#[function_component]
fn Icon(props: &IconProps) -> Html {
    html! {
        <svg viewBox="0 0 16 16" fill="currentColor">
            <path d={props.path} />
        </svg>
    }
}
