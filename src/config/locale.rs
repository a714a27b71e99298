//! Syntactic checks for `lang` and `timezone`.
//!
//! No locale or tz database is bundled: a tag that is well formed passes,
//! whether or not the runtime that renders dates knows it.

/// IANA tz database areas (first component of `Area/Location`).
const TZ_AREAS: &[&str] = &[
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
    "Etc",
];

/// Zone names valid without an area.
const TZ_SINGLE: &[&str] = &["UTC", "GMT"];

/// Check a BCP 47 language tag such as `en`, `zh-Hans`, `pt-BR`, `sr-Latn-RS`.
///
/// Primary subtag: 2-3 letters (or 4-8 for registered languages).
/// Following subtags: 1-8 alphanumerics, separated by `-`.
pub fn is_valid_lang(tag: &str) -> bool {
    let mut subtags = tag.split('-');

    let Some(primary) = subtags.next() else {
        return false;
    };
    if !(2..=8).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }

    subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

/// Check an IANA time zone name such as `Asia/Istanbul`,
/// `America/Argentina/Buenos_Aires`, `Etc/GMT+3` or `UTC`.
pub fn is_valid_timezone(name: &str) -> bool {
    if TZ_SINGLE.contains(&name) {
        return true;
    }

    let mut parts = name.split('/');
    let Some(area) = parts.next() else {
        return false;
    };
    if !TZ_AREAS.contains(&area) {
        return false;
    }

    let mut locations = 0;
    for part in parts {
        let ok = !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'+'));
        if !ok {
            return false;
        }
        locations += 1;
    }
    locations > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_tags() {
        for tag in ["en", "tr", "zh-Hans", "pt-BR", "sr-Latn-RS", "es-419"] {
            assert!(is_valid_lang(tag), "{tag} should be valid");
        }
        for tag in ["", "e", "en_US", "en-", "-en", "english-language-too-long-subtag123", "1a"] {
            assert!(!is_valid_lang(tag), "{tag} should be invalid");
        }
    }

    #[test]
    fn test_timezones() {
        for name in [
            "Asia/Istanbul",
            "America/Argentina/Buenos_Aires",
            "Etc/GMT+3",
            "UTC",
            "America/Port-au-Prince",
        ] {
            assert!(is_valid_timezone(name), "{name} should be valid");
        }
        for name in ["", "Istanbul", "Mars/Olympus", "Asia/", "Asia//Tokyo", "utc", "Europe/Kyiv Time"] {
            assert!(!is_valid_timezone(name), "{name} should be invalid");
        }
    }
}
