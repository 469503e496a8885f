//! Operations behind the CLI commands
//!
//! This module provides high-level operations that coordinate:
//! - AddOperation: The complete add workflow
//! - HostsOperation: Listing the bot classes of a project
//! - CheckOperation: Manifest schema validation
//!
//! The operations coordinate with:
//! - Augment: Host discovery and source edits (from augment module)
//! - Manifest: Version dispatch and mutation (from manifest module)
//! - Transaction: All-or-nothing writes (from transaction module)
//! - UI: Status reporting (from ui module)

pub mod add;
pub mod check;
pub mod hosts;

pub use add::{AddOperation, AddOptions};
pub use check::CheckOperation;
pub use hosts::{HostsOperation, HostsOptions};
