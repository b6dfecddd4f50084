//! Text and URL parsing.
//!
//! - `extract`: locating a URL inside free text
//! - `normalize`: reducing a URL to its clean `scheme://host/path` form

mod extract;
mod normalize;

pub use extract::{browser_target, extract_url, find_url, upgrade_scheme};
pub use normalize::clean_url;
