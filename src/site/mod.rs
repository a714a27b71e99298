//! Consumer-side helpers over [`SiteConfig`](crate::config::SiteConfig).
//!
//! Pure functions a site generator calls with the config's values. None of
//! them render anything; they answer "how many", "is it out yet" and
//! "which URL".
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `paginate` | Index slice and page ranges                    |
//! | `schedule` | Scheduled-post visibility with the margin      |
//! | `links`    | Edit-this-page links and social preview images |

mod links;
mod paginate;
mod schedule;

pub use links::EditLink;
pub use paginate::Pagination;
pub use schedule::{PostSchedule, is_published};
