//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// On-disk format of a config mirror, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Report `value` unless it is an absolute http(s) URL with a host.
///
/// Uses the `url` crate for strict parsing.
pub fn check_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com/",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com/",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com/",
            );
        }
    }
}

/// Expand a leading `~` in a user-supplied config path.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/content/  ← start
/// /home/user/site/folio.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("folio.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("site.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("folio")), ConfigFormat::Toml);
    }

    #[test]
    fn test_check_http_url() {
        let field = FieldPath::new("website");

        let mut diag = ConfigDiagnostics::new();
        check_http_url(field, "https://example.com/", &mut diag);
        check_http_url(field, "http://localhost:4321/blog/", &mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        check_http_url(field, "example.com", &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        check_http_url(field, "mailto:alice@example.com", &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("folio.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, temp.path().join("folio.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file(temp.path(), Path::new("folio-missing-1f3a.toml")).is_none());
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(expand_path(Path::new("folio.toml")), PathBuf::from("folio.toml"));
        assert!(!expand_path(Path::new("~/folio.toml")).starts_with("~"));
    }
}
