//! Applying suggested fixes to source text.

use crate::types::{Replacement, Violation};

/// Outcome of applying a batch of replacements to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The rewritten content.
    pub content: String,
    /// Replacements that were applied.
    pub applied: usize,
    /// Replacements skipped because they overlapped an earlier one or
    /// pointed outside the content.
    pub skipped: usize,
}

impl FixOutcome {
    /// Returns true if any replacement was applied.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Applies replacements to `content`.
///
/// Replacements are ordered by start offset (stable, so ties keep their
/// input order). A replacement overlapping one already accepted is skipped;
/// callers wanting stacked fixes on the same span re-run analysis on the
/// output and apply again.
#[must_use]
pub fn apply_replacements(content: &str, replacements: &[&Replacement]) -> FixOutcome {
    let mut ordered: Vec<&Replacement> = replacements.to_vec();
    ordered.sort_by_key(|r| r.location.offset);

    let mut accepted: Vec<&Replacement> = Vec::with_capacity(ordered.len());
    let mut skipped = 0;
    let mut cursor = 0;

    for replacement in ordered {
        let start = replacement.location.offset;
        let end = replacement.location.end();
        let in_bounds = end <= content.len()
            && content.is_char_boundary(start)
            && content.is_char_boundary(end);

        if start < cursor || !in_bounds {
            skipped += 1;
            continue;
        }

        cursor = end;
        accepted.push(replacement);
    }

    let mut output = content.to_string();
    for replacement in accepted.iter().rev() {
        output.replace_range(
            replacement.location.offset..replacement.location.end(),
            &replacement.new_text,
        );
    }

    FixOutcome {
        content: output,
        applied: accepted.len(),
        skipped,
    }
}

/// Collects the automatic replacements carried by `violations`.
#[must_use]
pub fn replacements_of(violations: &[Violation]) -> Vec<&Replacement> {
    violations.iter().filter_map(Violation::replacement).collect()
}
