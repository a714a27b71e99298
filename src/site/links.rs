//! Per-post links derived from the config: edit link and preview image.

use crate::config::SiteConfig;
use serde::Serialize;

/// A resolved "edit this page" link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pub text: String,
    pub href: String,
}

impl SiteConfig {
    /// Edit link for the post at `file_path` (relative to the repo root).
    ///
    /// `None` when `editPost.enabled` is false or the post opts out with
    /// `hide`, whatever `text` and `url` say.
    pub fn edit_link(&self, file_path: &str, hide: bool) -> Option<EditLink> {
        if !self.edit_post.enabled || hide {
            return None;
        }
        let path = file_path.trim_start_matches(['/', '\\']);
        let base = &self.edit_post.url;
        let href = if base.ends_with('/') || path.is_empty() {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Some(EditLink {
            text: self.edit_post.text.to_string(),
            href,
        })
    }

    /// Absolute URL of the social preview image for post `slug`.
    ///
    /// The post's own image wins; else the generated `posts/<slug>/index.png`
    /// when `dynamicOgImage` is on and the slug is non-empty; else the
    /// site-wide `ogImage`.
    pub fn og_image_url(&self, slug: &str, custom: Option<&str>) -> String {
        let slug = slug.trim_matches('/');
        let image = match custom {
            Some(custom) if !custom.trim().is_empty() => custom.trim().to_string(),
            _ if self.dynamic_og_image && !slug.is_empty() => format!("posts/{slug}/index.png"),
            _ => self.og_image.to_string(),
        };
        self.absolute_url(&image)
    }

    /// Absolute URL of the site-wide preview image.
    pub fn site_og_image_url(&self) -> String {
        self.absolute_url(&self.og_image)
    }

    /// Resolve `path` against `website`; absolute URLs pass through.
    fn absolute_url(&self, path: &str) -> String {
        if url::Url::parse(path).is_ok() {
            return path.to_string();
        }
        match url::Url::parse(&self.website) {
            Ok(base) => {
                // join treats a base without trailing slash as a file
                let base = if base.path().ends_with('/') {
                    base
                } else {
                    let mut dir = base.clone();
                    dir.set_path(&format!("{}/", base.path()));
                    dir
                };
                base.join(path.trim_start_matches('/'))
                    .map(|url| url.to_string())
                    .unwrap_or_else(|_| path.to_string())
            }
            Err(_) => path.to_string(),
        }
    }
}
