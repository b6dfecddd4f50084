//! Redirect probing over HTTP.

mod redirects;

pub use redirects::{RedirectResolver, Resolve, ResolutionOutcome};
