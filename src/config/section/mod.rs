//! Nested configuration pieces of the site record.
//!
//! | Module      | Key          | Purpose                          |
//! |-------------|--------------|----------------------------------|
//! | `edit_post` | `[editPost]` | "Edit this page" link settings   |
//! | `direction` | `dir`        | Text direction enum              |

mod direction;
mod edit_post;

pub use direction::TextDir;
pub use edit_post::EditPostConfig;
