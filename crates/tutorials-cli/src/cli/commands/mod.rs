//! CLI command handlers. Each command is in its own file.

pub(crate) mod check;
mod completions;
mod urls;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use urls::{run_embed, run_thumbnail, run_video_id};
