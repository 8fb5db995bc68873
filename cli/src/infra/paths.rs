//! Host facts needed to place the launch agent.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::AgentLayout;

/// The current user's home directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("cannot determine home directory")
}

/// Real uid of this process; launchd's GUI domain is keyed by it.
#[must_use]
pub fn current_uid() -> u32 {
    nix::unistd::getuid().as_raw()
}

/// Layout for the invoking user.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_layout() -> Result<AgentLayout> {
    Ok(AgentLayout::for_user(home_dir()?, current_uid()))
}
