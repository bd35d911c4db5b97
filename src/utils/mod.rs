pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{normalize_base_url, resolve_site_path};
