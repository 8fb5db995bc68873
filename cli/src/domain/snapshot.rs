//! Parsing of `launchctl print` output into a typed job snapshot.
//!
//! launchd does not promise a stable format: depending on the macOS release
//! the program arguments show up as a parenthesised, quoted, comma-separated
//! list or as a brace-delimited unquoted one. The extractors below strip
//! quotes, commas and parens on both sides of a value instead of assuming
//! either shape.

use serde::Serialize;

// ── Snapshot ─────────────────────────────────────────────────────────────────

/// The subset of a loaded job's live state needed to decide whether it can be
/// left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobSnapshot {
    /// Process id, when the job is running.
    pub pid: Option<u32>,
    /// Value of the `--port` argument.
    pub port: Option<u16>,
    /// Lowercased value of the `--bind` argument.
    pub bind: Option<String>,
}

impl JobSnapshot {
    /// `true` when the live job already runs with `port` and `bind`.
    ///
    /// The port must match exactly. A job without `--bind` predates the flag
    /// and is accepted for any bind.
    #[must_use]
    pub fn matches(&self, port: u16, bind: &str) -> bool {
        if self.port != Some(port) {
            return false;
        }
        self.bind.as_deref().is_none_or(|live| live == bind)
    }
}

// ── Parser ───────────────────────────────────────────────────────────────────

/// Parse raw `launchctl print` output. Never fails; anything that cannot be
/// found comes back as `None`.
#[must_use]
pub fn parse_snapshot(output: &str) -> JobSnapshot {
    JobSnapshot {
        pid: extract_int_value(output, "pid"),
        port: extract_flag_value(output, "--port").and_then(|raw| raw.parse().ok()),
        bind: extract_flag_value(output, "--bind").map(str::to_lowercase),
    }
}

/// `<key> = <digits>`, e.g. `pid = 123`.
fn extract_int_value(output: &str, key: &str) -> Option<u32> {
    let needle = format!("{key} =");
    let start = output.find(&needle)? + needle.len();
    let rest = output[start..].trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}

/// The token following `flag`, with list punctuation stripped.
fn extract_flag_value<'a>(output: &'a str, flag: &str) -> Option<&'a str> {
    let start = output.find(flag)? + flag.len();
    let rest = output[start..].trim_start_matches(is_leading_delimiter);
    let end = rest.find(is_value_terminator).unwrap_or(rest.len());
    let token = rest[..end].trim();
    (!token.is_empty()).then_some(token)
}

fn is_leading_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | '=' | '"' | '\'')
}

// `=` is deliberately absent: it may appear inside a value.
fn is_value_terminator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | '"' | '\'')
}

// ── Unit tests ───────────────────────────────────────────────────────────────
