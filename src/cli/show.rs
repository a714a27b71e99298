//! `folio show`: print the resolved config.

use super::OutputFormat;
use crate::config::{SiteConfig, cfg};
use anyhow::Result;

/// Render `config` in `format`; `pretty` only affects JSON.
pub fn render(config: &SiteConfig, format: OutputFormat, pretty: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Toml => config.to_toml()?,
        OutputFormat::Json => {
            let mut json = config.to_json(pretty)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

pub fn run(format: OutputFormat, pretty: bool) -> Result<()> {
    print!("{}", render(&cfg(), format, pretty)?);
    Ok(())
}
