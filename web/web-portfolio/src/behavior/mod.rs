mod hover;
mod navigation;
mod reveal;
mod smooth_scroll;

pub use hover::*;
pub use navigation::*;
pub use reveal::*;
pub use smooth_scroll::*;
