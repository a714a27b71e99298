//! Site configuration record.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested pieces ([editPost], dir)
//! ├── types/         # Errors, diagnostics, field paths, global handle
//! ├── locale         # lang / timezone checks
//! ├── util           # URL checks, config file lookup
//! └── mod.rs         # SiteConfig and the built-in SITE record (this file)
//! ```
//!
//! The record is a plain immutable value. [`SITE`] is the compiled-in copy;
//! a `folio.toml` (or `*.json`) mirror may override any subset of its keys.
//! Keys keep their camelCase spelling on disk:
//!
//! ```toml
//! website = "https://example.com/"
//! postPerPage = 4
//! scheduledPostMargin = 900000
//!
//! [editPost]
//! enabled = true
//! url = "https://github.com/alice/blog/edit/main/"
//! ```

mod locale;
pub mod section;
pub mod types;
pub(crate) mod util;

pub use locale::{is_valid_lang, is_valid_timezone};
pub use section::{EditPostConfig, TextDir};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigPresence, FieldPath, cfg, init_config,
};
pub use util::ConfigFormat;

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

/// Raster formats social networks accept for link previews.
const OG_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

// ============================================================================
// root configuration
// ============================================================================

/// Site configuration for folio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "", rename_all = "camelCase")]
pub struct SiteConfig {
    /// Canonical site URL.
    pub website: Cow<'static, str>,

    /// Display name of the site owner.
    pub author: Cow<'static, str>,

    /// Link to the author profile.
    pub profile: Cow<'static, str>,

    /// Site tagline.
    pub desc: Cow<'static, str>,

    /// Site title.
    pub title: Cow<'static, str>,

    /// Default social-preview image, a file in the public directory.
    pub og_image: Cow<'static, str>,

    /// Show the light/dark theme toggle.
    pub light_and_dark_mode: bool,

    /// Posts listed on the index page.
    pub post_per_index: u32,

    /// Posts per paginated page.
    pub post_per_page: u32,

    /// Grace period in milliseconds before a future-dated post counts as published.
    #[config(inline_doc = "15 minutes")]
    pub scheduled_post_margin: u64,

    /// Expose the archives page.
    pub show_archives: bool,

    /// Show the back button on post pages.
    pub show_back_button: bool,

    /// "Edit this page" link on posts.
    #[config(sub)]
    pub edit_post: EditPostConfig,

    /// Generate a preview image per post instead of using `ogImage`.
    pub dynamic_og_image: bool,

    /// Text direction, "ltr" or "rtl".
    pub dir: TextDir,

    /// Content language (BCP 47 tag).
    pub lang: Cow<'static, str>,

    /// IANA time zone used to display and schedule dates.
    pub timezone: Cow<'static, str>,
}

/// The built-in site record.
pub const SITE: SiteConfig = SiteConfig {
    website: Cow::Borrowed("https://mrzeynalli.xyz/"),
    author: Cow::Borrowed("Elvin Zeynalli"),
    profile: Cow::Borrowed("https://mrzeynalli.xyz/"),
    desc: Cow::Borrowed("Business Analyst / Quantitative Researcher / Data Scientist"),
    title: Cow::Borrowed("Elvin Zeynalli"),
    og_image: Cow::Borrowed("astropaper-og.jpg"),
    light_and_dark_mode: true,
    post_per_index: 4,
    post_per_page: 4,
    scheduled_post_margin: 15 * 60 * 1000,
    show_archives: true,
    show_back_button: true,
    edit_post: EditPostConfig::BUILTIN,
    dynamic_og_image: true,
    dir: TextDir::Ltr,
    lang: Cow::Borrowed("en"),
    timezone: Cow::Borrowed("Asia/Istanbul"),
};

impl Default for SiteConfig {
    fn default() -> Self {
        SITE
    }
}

impl SiteConfig {
    // ========================================================================
    // loading
    // ========================================================================

    /// Load configuration for the CLI.
    ///
    /// Without `--config`, searches upward from cwd for `folio.toml` and
    /// falls back to [`SITE`] when there is none. An explicit `--config`
    /// must exist. The result is validated before it is returned.
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::load_from(cli, &current_dir()?)
    }

    /// Resolve the mirror file for the CLI, `None` when only the built-in
    /// record applies.
    pub fn locate(cli: &Cli) -> Result<Option<PathBuf>> {
        Self::locate_from(cli, &current_dir()?)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let Some(path) = Self::locate_from(cli, cwd)? else {
            debug!("config"; "no {} found, using built-in site record", CONFIG_FILE);
            SITE.validate()?;
            return Ok(SITE);
        };

        let (config, diag) = Self::from_path(&path)?;
        config.validate_with(diag)?;
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    fn locate_from(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(path) => {
                let path = util::expand_path(path);
                let path = if path.is_relative() { cwd.join(path) } else { path };
                if !path.exists() {
                    bail!(
                        "Config file '{}' not found. Run 'folio init' to create one.",
                        path.display()
                    );
                }
                Ok(Some(path))
            }
            None => Ok(util::find_config_file(cwd, Path::new(CONFIG_FILE))),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a mirror file, warning about unknown keys.
    ///
    /// The returned diagnostics list the keys the file left out.
    pub fn from_path(path: &Path) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let format = ConfigFormat::from_path(path);

        let (config, ignored) = Self::parse_with_ignored(&content, format)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let mut diag = ConfigDiagnostics::new();
        for key in Self::missing_keys(&content, format)? {
            diag.inherited(key);
        }

        Ok((config, diag))
    }

    /// Parse content, collecting any unknown keys.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let track = |path: serde_ignored::Path| ignored.push(path.to_string());
        let config = match format {
            ConfigFormat::Toml => {
                serde_ignored::deserialize(toml::Deserializer::new(content), track)?
            }
            ConfigFormat::Json => {
                let mut de = serde_json::Deserializer::from_str(content);
                let config = serde_ignored::deserialize(&mut de, track)?;
                de.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    /// Keys of the full record that `content` does not set.
    fn missing_keys(content: &str, format: ConfigFormat) -> Result<Vec<&'static str>, ConfigError> {
        let presence = match format {
            ConfigFormat::Toml => ConfigPresence::from_toml(content)?,
            ConfigFormat::Json => ConfigPresence::from_json(content)?,
        };
        Ok(presence.missing(&Self::keys()))
    }

    /// Print warning about unknown keys.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown keys in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // serialization
    // ========================================================================

    /// Serialize as TOML, `[editPost]` table last.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Serialize as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Commented starter file for `folio init`.
    pub fn starter_template() -> String {
        let mut out = format!(
            "# folio configuration file (v{})\n\n",
            env!("CARGO_PKG_VERSION")
        );
        out.push_str(&Self::template_with_header());
        out
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// `scheduledPostMargin` as a duration.
    pub const fn scheduled_margin(&self) -> Duration {
        Duration::from_millis(self.scheduled_post_margin)
    }

    /// Attributes for the document's root `<html>` element.
    pub fn html_attrs(&self) -> [(&'static str, &str); 2] {
        [("lang", &*self.lang), ("dir", self.dir.as_str())]
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate, print warnings, and fail with every error at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with(ConfigDiagnostics::new())
    }

    /// Like [`validate`](Self::validate), continuing diagnostics from loading.
    fn validate_with(&self, mut diag: ConfigDiagnostics) -> Result<(), ConfigError> {
        self.collect_diagnostics(&mut diag);
        diag.print_hints_and_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every field check without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);
        diag
    }

    fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;

        for (field, value) in [(fields.title, &self.title), (fields.author, &self.author)] {
            if value.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    "must not be empty",
                    format!("set {field} in {CONFIG_FILE}"),
                );
            }
        }
        if self.desc.trim().is_empty() {
            diag.warn(fields.desc, "site description is empty");
        }

        util::check_http_url(fields.website, &self.website, diag);
        util::check_http_url(fields.profile, &self.profile, diag);
        if !self.website.ends_with('/') {
            diag.warn(
                fields.website,
                "missing trailing slash, relative links will resolve against the parent path",
            );
        }

        self.validate_og_image(diag);

        if self.post_per_page == 0 {
            diag.warn(
                fields.post_per_page,
                "0 posts per page puts every post on a single page",
            );
        }

        self.edit_post.validate(diag);

        if !is_valid_lang(&self.lang) {
            diag.error_with_hint(
                fields.lang,
                format!("'{}' is not a BCP 47 language tag", self.lang),
                "use a tag like \"en\", \"tr\" or \"zh-Hans\"",
            );
        }
        if !is_valid_timezone(&self.timezone) {
            diag.error_with_hint(
                fields.timezone,
                format!("'{}' is not an IANA time zone name", self.timezone),
                "use a name like \"UTC\" or \"Asia/Istanbul\"",
            );
        }
    }

    fn validate_og_image(&self, diag: &mut ConfigDiagnostics) {
        let field = Self::FIELDS.og_image;
        let name = self.og_image.trim();

        if name.is_empty() {
            diag.error_with_hint(
                field,
                "must not be empty",
                "set a file name from the public directory, e.g.: \"og.jpg\"",
            );
            return;
        }
        if name.contains(['/', '\\']) {
            diag.error_with_hint(
                field,
                format!("'{name}' must be a file name, not a path"),
                "place the image directly in the public directory",
            );
            return;
        }

        let known = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                OG_IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if !known {
            diag.warn(
                field,
                format!(
                    "'{name}' is not a {} image, link previews may not show it",
                    OG_IMAGE_EXTENSIONS.join("/")
                ),
            );
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current working directory")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_record_values() {
        assert_eq!(SITE.website, "https://mrzeynalli.xyz/");
        assert_eq!(SITE.og_image, "astropaper-og.jpg");
        assert_eq!(SITE.post_per_index, 4);
        assert_eq!(SITE.post_per_page, 4);
        assert_eq!(SITE.scheduled_post_margin, 900_000);
        assert_eq!(SITE.scheduled_margin(), Duration::from_secs(15 * 60));
        assert!(!SITE.edit_post.enabled);
        assert_eq!(SITE.dir, TextDir::Ltr);
        assert_eq!(SITE.timezone, "Asia/Istanbul");
        assert_eq!(SiteConfig::default(), SITE);
    }

    #[test]
    fn test_builtin_record_is_valid() {
        let diag = SITE.diagnostics();
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_field_paths_use_file_keys() {
        assert_eq!(SiteConfig::FIELDS.og_image.as_str(), "ogImage");
        assert_eq!(
            SiteConfig::FIELDS.scheduled_post_margin.as_str(),
            "scheduledPostMargin"
        );
        assert_eq!(SiteConfig::FIELDS.edit_post.as_str(), "editPost");
        let keys = SiteConfig::keys();
        assert_eq!(keys.len(), 19);
        assert!(keys.contains(&"editPost.url"));
        assert!(!keys.contains(&"editPost"));
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(SiteConfig::from_toml("[editPost\nenabled = true").is_err());
    }

    #[test]
    fn test_partial_file_inherits_builtin() {
        let config = SiteConfig::from_toml("title = \"Notes\"\n[editPost]\nenabled = true").unwrap();
        assert_eq!(config.title, "Notes");
        assert!(config.edit_post.enabled);
        assert_eq!(config.edit_post.text, "Edit page");
        assert_eq!(config.author, SITE.author);
    }

    #[test]
    fn test_negative_counts_rejected() {
        assert!(SiteConfig::from_toml("postPerPage = -1").is_err());
        assert!(SiteConfig::from_toml("scheduledPostMargin = -5").is_err());
        assert!(SiteConfig::from_json(r#"{"postPerIndex": -4}"#).is_err());
    }

    #[test]
    fn test_invalid_dir_rejected() {
        assert!(SiteConfig::from_toml("dir = \"auto\"").is_err());
        let rtl = SiteConfig::from_toml("dir = \"rtl\"").unwrap();
        assert_eq!(rtl.html_attrs(), [("lang", "en"), ("dir", "rtl")]);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SITE;
        config.title = Cow::Owned("Quote \"and\" backslash \\".to_string());
        config.dir = TextDir::Rtl;
        config.edit_post.enabled = true;

        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_json_round_trip() {
        let json = SITE.to_json(true).unwrap();
        assert!(json.contains("\"postPerIndex\": 4"));
        assert!(json.contains("\"editPost\""));
        assert_eq!(SiteConfig::from_json(&json).unwrap(), SITE);
    }

    #[test]
    fn test_template_parses_back_to_builtin() {
        let template = SiteConfig::starter_template();
        assert!(template.contains("[editPost]"));
        assert!(template.contains("scheduledPostMargin = 900000  # 15 minutes"));
        let (parsed, ignored) =
            SiteConfig::parse_with_ignored(&template, ConfigFormat::Toml).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
        assert_eq!(parsed, SITE);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\npostsPerPage = 3\n[editPost]\nlabel = \"x\"";
        let (config, ignored) =
            SiteConfig::parse_with_ignored(content, ConfigFormat::Toml).unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(config.post_per_page, SITE.post_per_page);
        assert!(ignored.iter().any(|f| f == "postsPerPage"));
        assert!(ignored.iter().any(|f| f == "editPost.label"));
    }

    #[test]
    fn test_unknown_json_fields_detected() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored(r#"{"theme": "dark"}"#, ConfigFormat::Json).unwrap();
        assert_eq!(ignored, vec!["theme".to_string()]);
    }

    #[test]
    fn test_from_path_reports_missing_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "title = \"Notes\"\n").unwrap();

        let (config, diag) = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.title, "Notes");
        assert!(!diag.inherited_keys().contains(&"title"));
        assert!(diag.inherited_keys().contains(&"timezone"));
        assert!(diag.inherited_keys().contains(&"editPost.enabled"));
    }

    #[test]
    fn test_from_path_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        fs::write(&path, SITE.to_json(false).unwrap()).unwrap();

        let (config, diag) = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config, SITE);
        assert!(diag.inherited_keys().is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = SiteConfig::from_toml(
            r#"
title = ""
website = "mrzeynalli.xyz"
ogImage = "images/og.png"
lang = "en_US"
timezone = "Istanbul"
"#,
        )
        .unwrap();

        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "website", "ogImage", "lang", "timezone"]);
        assert!(matches!(config.validate(), Err(ConfigError::Diagnostics(d)) if d.len() == 5));
    }

    #[test]
    fn test_validation_warnings_do_not_fail() {
        let config = SiteConfig::from_toml(
            r#"
website = "https://example.com/blog"
desc = ""
ogImage = "og.svg"
postPerPage = 0
"#,
        )
        .unwrap();

        let diag = config.diagnostics();
        assert!(diag.is_empty());
        let warned: Vec<_> = diag.warnings().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(warned, vec!["desc", "website", "ogImage", "postPerPage"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_edit_post_checked_only_when_enabled() {
        let disabled = SiteConfig::from_toml("[editPost]\nurl = \"\"").unwrap();
        assert!(disabled.diagnostics().is_empty());

        let enabled = SiteConfig::from_toml("[editPost]\nenabled = true\nurl = \"\"").unwrap();
        let diag = enabled.diagnostics();
        assert_eq!(diag.errors()[0].field.as_str(), "editPost.url");
    }

    fn parse_cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let cli = parse_cli(&["check"]);
        assert_eq!(SiteConfig::locate_from(&cli, temp.path()).unwrap(), None);
        assert_eq!(SiteConfig::load_from(&cli, temp.path()).unwrap(), SITE);
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let cli = parse_cli(&["check", "-C", "missing.toml"]);
        let err = SiteConfig::load_from(&cli, temp.path()).unwrap_err();
        assert!(err.to_string().contains("missing.toml"), "{err}");
    }

    #[test]
    fn test_load_explicit_json_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("site.json"), r#"{"postPerPage": 8}"#).unwrap();

        let cli = parse_cli(&["show", "--config", "site.json"]);
        let config = SiteConfig::load_from(&cli, temp.path()).unwrap();
        assert_eq!(config.post_per_page, 8);
        assert_eq!(config.title, SITE.title);
    }

    #[test]
    fn test_load_searches_upward() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/data/blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "title = \"Notes\"\n").unwrap();

        let cli = parse_cli(&["check"]);
        assert_eq!(
            SiteConfig::locate_from(&cli, &nested).unwrap(),
            Some(temp.path().join(CONFIG_FILE))
        );
        assert_eq!(SiteConfig::load_from(&cli, &nested).unwrap().title, "Notes");
    }

    #[test]
    fn test_load_rejects_invalid_mirror() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "title = \"\"\ntimezone = \"Mars/Olympus\"\n",
        )
        .unwrap();

        let err = SiteConfig::load_from(&parse_cli(&["check"]), temp.path()).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "timezone"]);
    }
}
