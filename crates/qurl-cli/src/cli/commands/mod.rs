//! CLI command handlers. Each command is in its own file.

mod build;
mod decode;
mod encode;

pub use build::{render_build, run_build};
pub use decode::{render_decode, run_decode};
pub use encode::{render_encode, run_encode};
