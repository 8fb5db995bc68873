//! Gateway bind modes and connection mode.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ── Constants ────────────────────────────────────────────────────────────────

/// Bind mode used when neither the environment nor the config file name one.
pub const DEFAULT_BIND_MODE: BindMode = BindMode::Loopback;

// ── Bind mode ────────────────────────────────────────────────────────────────

/// Network exposure mode passed to the gateway as `--bind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindMode {
    /// Listen on 127.0.0.1 only.
    Loopback,
    /// Listen on the tailnet interface.
    Tailnet,
    /// Listen on the local network.
    Lan,
    /// Let the gateway pick.
    Auto,
}

impl BindMode {
    /// Every supported mode, in the order they are documented.
    pub const ALL: [BindMode; 4] = [Self::Loopback, Self::Tailnet, Self::Lan, Self::Auto];

    /// The lowercase token written into `--bind`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loopback => "loopback",
            Self::Tailnet => "tailnet",
            Self::Lan => "lan",
            Self::Auto => "auto",
        }
    }

    /// Normalise a raw value (trim + lowercase) and accept it only if it names
    /// a supported mode. Unknown values yield `None` so callers fall through
    /// to the next source.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for BindMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a bind token is not one of `loopback`, `tailnet`, `lan`, `auto`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported bind mode '{0}'")]
pub struct UnknownBindMode(pub String);

impl FromStr for BindMode {
    type Err = UnknownBindMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalised)
            .ok_or(UnknownBindMode(normalised))
    }
}

// ── Connection mode ──────────────────────────────────────────────────────────

/// How the app talks to its gateway. In remote mode the local bind preference
/// is ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    #[default]
    Local,
    Remote,
}

impl ConnectionMode {
    #[must_use]
    pub fn is_remote(self) -> bool {
        self == Self::Remote
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
