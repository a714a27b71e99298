//! Configuration utility types.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `error`    | Configuration error and diagnostic types     |
//! | `field`    | Typed field paths for diagnostics            |
//! | `handle`   | Global configuration handle (thread-safe)    |
//! | `presence` | Which keys a config file sets                |

mod error;
mod field;
pub mod handle;
mod presence;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
pub use presence::ConfigPresence;
