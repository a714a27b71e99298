//! folio - typed site configuration for a personal blog/portfolio.
//!
//! One immutable [`SiteConfig`](config::SiteConfig) record with a built-in
//! value ([`SITE`](config::SITE)), an optional `folio.toml`/JSON mirror that
//! overrides it, load-time validation, and the small pure helpers a site
//! generator needs to consume it.

pub mod cli;
pub mod config;
pub mod logger;
pub mod site;
pub mod utils;
