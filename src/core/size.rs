// irt/src/core/size.rs
//! Size specifications: `200px`, `50%` or a bare `200`.

use super::{ResizeError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSpec {
    /// Absolute length, independent of the reference.
    Pixels(u32),
    /// Percentage of the reference length; may exceed 100.
    Percent(u32),
}

impl SizeSpec {
    pub fn resolve(&self, reference: u32) -> u32 {
        match *self {
            SizeSpec::Pixels(px) => px,
            SizeSpec::Percent(pct) => {
                let scaled = u64::from(reference) * u64::from(pct) / 100;
                u32::try_from(scaled).unwrap_or(u32::MAX)
            }
        }
    }
}

impl FromStr for SizeSpec {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(invalid(s, "empty size"));
        }

        // Unit detection order matters: "px" wins over "%".
        if let Some(number) = text.strip_suffix("px") {
            parse_number(s, number).map(SizeSpec::Pixels)
        } else if text.contains('%') {
            parse_number(s, text.trim_matches('%')).map(SizeSpec::Percent)
        } else {
            parse_number(s, text).map(SizeSpec::Pixels)
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Pixels(px) => write!(f, "{}px", px),
            SizeSpec::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

fn parse_number(spec: &str, number: &str) -> Result<u32> {
    let number = number.trim();
    if number.is_empty() {
        return Err(invalid(spec, "missing number"));
    }

    number
        .parse::<u32>()
        .map_err(|e| invalid(spec, &format!("expected a non-negative integer ({})", e)))
}

fn invalid(spec: &str, reason: &str) -> ResizeError {
    ResizeError::InvalidSize {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses `spec` and resolves it against `reference` in one step.
pub fn resolve(spec: &str, reference: u32) -> Result<u32> {
    Ok(spec.parse::<SizeSpec>()?.resolve(reference))
}
