//! Bootstrap template and the substitution engine that renders it.
//!
//! - **Engine**: `{{NAME}}` substitution with a configurable missing-value policy
//! - **Bootstrap**: the embedded Envoy bootstrap document

mod bootstrap;
mod engine;

pub use bootstrap::{DOMAIN_NAME, ENVOY_BOOTSTRAP_TEMPLATE, XDS_HOST_ADDRESS};
pub use engine::{MissingPolicy, TemplateError, placeholders, render_template, vars};
