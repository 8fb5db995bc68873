//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod bind;
pub mod bundle;
pub mod descriptor;
pub mod error;
pub mod layout;
pub mod settings;
pub mod snapshot;
pub mod supervisor;

pub use bind::{BindMode, ConnectionMode, DEFAULT_BIND_MODE};
pub use bundle::GatewayBundle;
pub use descriptor::{GatewayCredentials, ServiceDescriptor, escape_plist_value, render_manifest};
pub use error::LaunchAgentError;
pub use layout::AgentLayout;
pub use settings::GatewaySettings;
pub use snapshot::{JobSnapshot, parse_snapshot};
pub use supervisor::{SupervisorCommand, SupervisorOutput};
