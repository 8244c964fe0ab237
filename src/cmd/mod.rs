//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module  | Commands handled |
//! |---------|------------------|
//! | `board` | `Board`          |
//! | `prefs` | `Prefs`          |

pub mod board;
pub mod prefs;

pub use board::cmd_board;
pub use prefs::cmd_prefs;
