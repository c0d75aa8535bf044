mod repo_card;
mod repositories;

pub use repo_card::*;
pub use repositories::*;
