//! `[editPost]` configuration.
//!
//! # Example
//!
//! ```toml
//! [editPost]
//! enabled = true
//! text = "Edit page"
//! url = "https://github.com/alice/blog/edit/main/"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// "Edit this page" link shown on posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "editPost", rename_all = "camelCase")]
pub struct EditPostConfig {
    /// Show the link on posts.
    pub enabled: bool,

    /// Link label.
    pub text: Cow<'static, str>,

    /// Base URL; the post's source path is appended to it.
    #[config(inline_doc = "e.g. https://github.com/<user>/<repo>/edit/main/")]
    pub url: Cow<'static, str>,
}

impl EditPostConfig {
    /// Built-in value: disabled, with a placeholder repository URL.
    pub const BUILTIN: Self = Self {
        enabled: false,
        text: Cow::Borrowed("Edit page"),
        url: Cow::Borrowed("https://github.com/your-username/your-repo-name/edit/main/"),
    };

    /// Validate link settings.
    ///
    /// Text and URL only matter while the link is enabled.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        if self.text.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.text,
                format!("{} is enabled but the link text is empty", Self::FIELDS.enabled),
                "set text, e.g.: \"Edit page\"",
            );
        }

        crate::config::util::check_http_url(Self::FIELDS.url, &self.url, diag);
    }
}

impl Default for EditPostConfig {
    fn default() -> Self {
        Self::BUILTIN
    }
}
