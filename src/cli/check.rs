//! `folio check`: report where the config came from.
//!
//! Validation itself runs while loading; reaching this command means the
//! config passed.

use crate::{config::cfg, log};
use std::path::Path;

pub fn report(source: Option<&Path>) {
    let config = cfg();
    match source {
        Some(path) => log!("check"; "{} is valid", path.display()),
        None => log!("check"; "no config file, built-in site record is valid"),
    }
    log!(
        "check";
        "{} by {}, {} ({}), {} posts per page",
        config.title,
        config.author,
        config.lang,
        config.dir,
        config.post_per_page
    );
}
