//! External integrations
//!
//! The only external system is the headless renderer, launched as a child process.

pub mod renderer;

pub use renderer::{CommandOutput, CommandRunner, ProcessRunner, RenderCommand};
