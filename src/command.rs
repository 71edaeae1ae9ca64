//! Parsing of free-form mirror commands.
//!
//! A command is a single short word naming which half of the image to keep
//! and, optionally, where the axis of symmetry sits:
//!
//! ```text
//! [c] (l | left | r | right) [NN.. | a | auto]
//! ```
//!
//! - `c` prefix — operate on the chat's last photo instead of the sender's
//! - `l`/`left` — keep the left half; `r`/`right` — keep the right half
//! - trailing digits — axis position as an integer percentage (`left40`)
//! - `a`/`auto` — derive the axis from a detected face
//! - nothing — axis at the image midpoint
//!
//! Input is trimmed and lowercased first; the whole string must match or the
//! parse fails — there is no partial recovery. `"cl40"` parses,
//! `"cl40 please"` does not.
//!
//! Percentages are not range-checked: `"left150"` yields `Literal(1.5)`,
//! which downstream geometry treats as a degenerate axis. Clamping here would
//! silently change what the user asked for.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not a mirror command at all. Recoverable: the host
    /// decides whether to tell the user or stay silent.
    #[error("not a mirror command: '{0}'")]
    NoMatch(String),
    /// Side keyword was scanned but not one of `l`/`left`/`r`/`right`.
    /// Unreachable with the current scanner; kept for the permissive path.
    #[error("invalid side keyword: '{0}'")]
    InvalidSide(String),
}

/// Where the axis of symmetry sits, before resolution against an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSpec {
    /// Explicit fraction of the image width, from an integer percentage.
    /// Not validated: values ≥ 1.0 are passed through as given.
    Literal(f64),
    /// Resolve from a detected facial feature's horizontal position.
    Auto,
    /// Image midpoint (fraction 0.5).
    Default,
}

/// A fully parsed mirror command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorCommand {
    /// `c` prefix present: the host should act on chat scope, not user scope.
    pub is_chat_scope: bool,
    /// Keep the left half (true) or the right half (false).
    pub mirror_left: bool,
    pub axis: AxisSpec,
}

/// Parse user text into a [`MirrorCommand`].
///
/// Pure and deterministic: the same text always yields the same command or
/// the same error.
///
/// ```
/// # use halfmirror::command::{parse_command, AxisSpec};
/// let cmd = parse_command("cl40").unwrap();
/// assert!(cmd.is_chat_scope);
/// assert!(cmd.mirror_left);
/// assert_eq!(cmd.axis, AxisSpec::Literal(0.40));
/// ```
pub fn parse_command(text: &str) -> Result<MirrorCommand, ParseError> {
    let normalized = text.trim().to_ascii_lowercase();

    // No side keyword starts with 'c', so consuming the scope marker never
    // needs backtracking.
    let (is_chat_scope, rest) = match normalized.strip_prefix('c') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };

    let Some((side, tail)) = scan_side(rest) else {
        return Err(ParseError::NoMatch(normalized.clone()));
    };
    let Some(axis) = scan_axis(tail) else {
        return Err(ParseError::NoMatch(normalized.clone()));
    };
    let mirror_left = side_is_left(side)?;

    Ok(MirrorCommand {
        is_chat_scope,
        mirror_left,
        axis,
    })
}

/// Split off the side keyword. Longest token first, so `left40` scans as
/// `left` + `40` rather than `l` + `eft40`.
fn scan_side(input: &str) -> Option<(&str, &str)> {
    for token in ["left", "right", "l", "r"] {
        if let Some(tail) = input.strip_prefix(token) {
            return Some((token, tail));
        }
    }
    None
}

fn side_is_left(side: &str) -> Result<bool, ParseError> {
    match side {
        "l" | "left" => Ok(true),
        "r" | "right" => Ok(false),
        other => Err(ParseError::InvalidSide(other.to_string())),
    }
}

/// Interpret everything after the side keyword. `None` means the whole
/// command fails to match.
fn scan_axis(tail: &str) -> Option<AxisSpec> {
    match tail {
        "" => Some(AxisSpec::Default),
        "a" | "auto" => Some(AxisSpec::Auto),
        digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
            // f64 so arbitrarily long digit runs can't overflow the parse.
            let percent: f64 = digits.parse().ok()?;
            Some(AxisSpec::Literal(percent / 100.0))
        }
        _ => None,
    }
}
