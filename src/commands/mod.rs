pub mod render;
pub mod validate;

pub use render::{cmd_render, render_command_file};
pub use validate::cmd_validate;
