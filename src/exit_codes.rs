//! Exit code constants for the envoy-template CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Template rendering failure
//! - 3: Output path or filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable config file, or invalid option values.
pub const USER_ERROR: i32 = 1;

/// Template failure: unresolved or malformed placeholder.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Output failure: the output path could not be resolved or written.
pub const OUTPUT_FAILURE: i32 = 3;
