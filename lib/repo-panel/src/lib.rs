//! Ranking and presentation of a developer's public repositories.
//!
//! The crate is free of any browser dependency: it turns the GitHub listing into
//! a [`panel::PanelView`], and the frontend only maps that view onto markup.

pub mod card;
pub mod panel;
pub mod rank;
pub mod summary;
