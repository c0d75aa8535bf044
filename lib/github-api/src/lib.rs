pub mod error;
pub mod repos;

pub use error::ApiError;

pub const GITHUB_API_HOST: &str = "https://api.github.com";
pub const GITHUB_WEB_HOST: &str = "https://github.com";

#[cfg(not(target_arch = "wasm32"))]
pub(crate) const UA: &str = concat!("rust-web-portfolio/", env!("CARGO_PKG_VERSION"));
