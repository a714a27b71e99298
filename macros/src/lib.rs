//! Proc macros for folio.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "editPost", rename_all = "camelCase")]
//! /// "Edit this page" link settings.
//! pub struct EditPostConfig {
//!     /// Show the link on posts.
//!     pub enabled: bool,
//!
//!     /// Link label.
//!     #[config(inline_doc = "shown next to the post date")]
//!     pub text: Cow<'static, str>,
//! }
//!
//! // Generates:
//! // - EditPostConfig::FIELDS.text -> FieldPath("editPost.text")
//! // - EditPostConfig::template() -> TOML string with comments
//! // - EditPostConfig::template_with_header() -> with [editPost] header
//! // - EditPostConfig::KEYS -> ["editPost.enabled", "editPost.text"]
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (empty for the root table)
//! - `#[config(rename_all = "camelCase")]` - key casing, mirrors serde
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested config, emitted as its own table
//! - `#[config(name = "x")]` - Custom TOML key
//! - `#[config(inline_doc = "x")]` - Trailing comment in template
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `EditPostConfig` → `edit_post`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, KEYS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
