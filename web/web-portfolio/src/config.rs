use repo_panel::panel::PanelConfig;
use web_sys::Element;

pub const REPO_CONTAINER_ID: &str = "github-repos";
/// Optional attribute on the container naming another GitHub account.
pub const ACCOUNT_ATTRIBUTE: &str = "data-account";

pub const NAV: &str = ".nav";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_ANCHORS: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";

pub const NAV_SOLID_AFTER: f64 = 100.0;
pub const NAV_SOLID_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
pub const NAV_SOLID_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.06)";
pub const NAV_CLEAR_BACKGROUND: &str = "rgba(255, 255, 255, 0.85)";
pub const NAV_CLEAR_SHADOW: &str = "none";

pub const REVEAL_TARGETS: &str = ".section-header, .about-text, .about-skills, .experience-card, \
     .project-card, .finding-card, .blog-card, .current-card, .resume-card, .contact-link";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

pub const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;
/// Gap kept between the fixed nav and a scrolled-to section.
pub const SCROLL_GAP: i32 = 20;

pub const SKILL_TAGS: &str = ".skill-tag";
pub const HOVER_CARDS: &str = ".project-card, .finding-card, .blog-card";

pub fn panel_config(container: &Element) -> PanelConfig {
    match container
        .get_attribute(ACCOUNT_ATTRIBUTE)
        .filter(|account| !account.trim().is_empty())
    {
        Some(account) => PanelConfig::with_account(account.trim()),
        None => PanelConfig::default(),
    }
}
