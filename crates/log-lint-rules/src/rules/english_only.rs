//! Rule flagging log messages written in non-Latin scripts.
//!
//! Detection is a script-range heuristic, not language detection: any code
//! point from the Cyrillic, Han, Hiragana or Katakana scripts fires it.
//! When `english_only_gate` is set, a hit here stops the remaining rules
//! for the message, since casing and punctuation checks are meaningless on
//! mixed-script text.

use super::{violation, MessageRule};
use crate::call::Fragment;
use log_lint_core::{Config, RuleId, Violation};
use std::ops::RangeInclusive;

/// Code point ranges of the Cyrillic, Han, Hiragana and Katakana scripts.
const SCRIPT_RANGES: &[RangeInclusive<u32>] = &[
    // Cyrillic
    0x0400..=0x052F,
    0x1C80..=0x1C8F,
    0x1D2B..=0x1D2B,
    0x1D78..=0x1D78,
    0x2DE0..=0x2DFF,
    0xA640..=0xA69F,
    0xFE2E..=0xFE2F,
    0x1E030..=0x1E08F,
    // Han
    0x2E80..=0x2E99,
    0x2E9B..=0x2EF3,
    0x2F00..=0x2FD5,
    0x3005..=0x3005,
    0x3007..=0x3007,
    0x3021..=0x3029,
    0x3038..=0x303B,
    0x3400..=0x4DBF,
    0x4E00..=0x9FFF,
    0xF900..=0xFA6D,
    0xFA70..=0xFAD9,
    0x16FE2..=0x16FE3,
    0x16FF0..=0x16FF1,
    0x20000..=0x2A6DF,
    0x2A700..=0x2EBE0,
    0x2F800..=0x2FA1D,
    0x30000..=0x323AF,
    // Hiragana
    0x3041..=0x3096,
    0x309D..=0x309F,
    0x1B001..=0x1B11F,
    0x1B132..=0x1B132,
    0x1B150..=0x1B152,
    0x1F200..=0x1F200,
    // Katakana
    0x30A1..=0x30FA,
    0x30FD..=0x30FF,
    0x31F0..=0x31FF,
    0x32D0..=0x32FE,
    0x3300..=0x3357,
    0xFF66..=0xFF6F,
    0xFF71..=0xFF9D,
    0x1AFF0..=0x1AFFE,
    0x1B000..=0x1B000,
    0x1B120..=0x1B122,
    0x1B155..=0x1B155,
    0x1B164..=0x1B167,
];

/// Returns true if `c` belongs to one of the flagged scripts.
#[must_use]
pub fn is_non_latin_script(c: char) -> bool {
    let cp = u32::from(c);
    // Everything below the Cyrillic block is Latin, Greek, symbols or controls.
    cp >= 0x0400 && SCRIPT_RANGES.iter().any(|range| range.contains(&cp))
}

/// Flags messages containing Cyrillic, Han, Hiragana or Katakana text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishOnly;

impl MessageRule for EnglishOnly {
    fn id(&self) -> RuleId {
        RuleId::EnglishOnly
    }

    fn description(&self) -> &'static str {
        "Log messages must be written in English (no Cyrillic, Han, Hiragana or Katakana)"
    }

    fn evaluate(&self, fragment: &Fragment, _config: &Config) -> Option<Violation> {
        if !fragment.text.chars().any(is_non_latin_script) {
            return None;
        }

        Some(violation(
            self,
            fragment,
            "log message should be in English only",
        ))
    }
}
