//! Scheduled posts: a post dated in the near future counts as published
//! once it is within `scheduledPostMargin` of its date.

use crate::config::SiteConfig;
use crate::utils::date::DateTime;

/// `now > published_at - margin`, all in unix milliseconds.
#[inline]
pub const fn is_published(published_at: i64, now: i64, margin_ms: u64) -> bool {
    let margin = if margin_ms > i64::MAX as u64 {
        i64::MAX
    } else {
        margin_ms as i64
    };
    now > published_at.saturating_sub(margin)
}

/// The scheduling-relevant part of a post's front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSchedule {
    pub published_at: DateTime,
    pub draft: bool,
}

impl PostSchedule {
    pub const fn new(published_at: DateTime) -> Self {
        Self {
            published_at,
            draft: false,
        }
    }

    pub const fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }
}

impl SiteConfig {
    /// Whether a post dated `published_at` is out at `now`.
    pub fn is_published(&self, published_at: &DateTime, now: &DateTime) -> bool {
        is_published(
            published_at.unix_millis(),
            now.unix_millis(),
            self.scheduled_post_margin,
        )
    }

    /// Whether a post belongs in listings at `now`.
    ///
    /// Drafts never show. In `dev` mode scheduled posts show early so they
    /// can be previewed.
    pub fn is_visible(&self, post: &PostSchedule, now: &DateTime, dev: bool) -> bool {
        !post.draft && (dev || self.is_published(&post.published_at, now))
    }
}
