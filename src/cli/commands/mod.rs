//! One file per subcommand; each returns the process exit code.

mod cat;
mod check;
mod presets;

pub use cat::cmd_cat;
pub use check::cmd_check;
pub use presets::cmd_presets;
