//! Roster field parsing
//!
//! The roster field accepts free text. Only a leading integer counts
//! (`"7 players"` reads as 7); anything else leaves the form alone.

use tracing::debug;

use crate::generator::OrderGenerator;
use crate::MAX_ROSTER_SIZE;

pub const CAP_ADVISORY: &str = "Maximum 11 players allowed in a cricket team.";

/// How a roster field entry was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterInput {
    Accepted(usize),
    OverCap(i64),
    Negative(i64),
    NotNumeric,
}

impl RosterInput {
    /// Informational warning to show next to the roster field
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            RosterInput::OverCap(_) => Some(CAP_ADVISORY),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, RosterInput::Accepted(_))
    }
}

/// Read the leading signed integer of `text`, saturating on overflow
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    let mut magnitude: i64 = 0;
    for b in digits.bytes() {
        let digit = i64::from(b - b'0');
        magnitude = magnitude.saturating_mul(10).saturating_add(digit);
    }
    Some(if negative { -magnitude } else { magnitude })
}

pub fn parse_roster_text(text: &str) -> RosterInput {
    match leading_integer(text) {
        None => RosterInput::NotNumeric,
        Some(n) if n < 0 => RosterInput::Negative(n),
        Some(n) if n as u64 > MAX_ROSTER_SIZE as u64 => RosterInput::OverCap(n),
        Some(n) => RosterInput::Accepted(n as usize),
    }
}

/// Feed a roster field entry to the generator. Rejected entries leave it untouched.
pub fn apply_roster_text(generator: &mut OrderGenerator, text: &str) -> RosterInput {
    let input = parse_roster_text(text);
    match input {
        RosterInput::Accepted(size) => {
            generator.set_roster_size(size as i64);
        }
        other => debug!("Roster field {:?} ignored: {:?}", text, other),
    }
    input
}
