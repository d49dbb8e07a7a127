//! Recognized rendering options.
//!
//! The renderer reads a fixed set of named options instead of exposing the
//! whole process environment to the template. Options come from, in
//! increasing order of precedence: built-in defaults, an optional YAML config
//! file, the environment, and command-line overrides.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use operations::recognized_env;
pub use types::{ConfigOverrides, RECOGNIZED_ENV_VARS};
