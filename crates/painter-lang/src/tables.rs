use serde::{Deserialize, Serialize};

/// A delimiter pair that is absorbed into the selection when found right outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandPair {
    /// Token expected before the selection (may be empty).
    pub left: String,
    /// Token expected after the selection (may be empty).
    pub right: String,
    /// Give back the last absorbed column (a separator space that is part of `right`).
    #[serde(default)]
    pub trim_last_space: bool,
}

impl ExpandPair {
    /// Create a pair.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            trim_last_space: false,
        }
    }

    /// Create a pair whose right token ends in a space that must not be captured.
    pub fn trimming_last_space(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            trim_last_space: true,
            ..Self::new(left, right)
        }
    }
}

/// Static trimming and expansion policy.
///
/// Order matters: tokens are tested in sequence on every trimming pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimTables {
    /// Leading tokens stripped from a selection.
    pub before: Vec<String>,
    /// Trailing tokens stripped from a selection.
    pub after: Vec<String>,
    /// Pairs swallowed into the selection when found right outside it.
    pub expand_when_outside: Vec<ExpandPair>,
}

impl TrimTables {
    /// Tables for Markdown notes (headings, tasks, quotes, links, inline fields).
    pub fn markdown() -> Self {
        let before = [
            "\"", "(", "[", "###### ", "##### ", "#### ", "### ", "## ", "# ", "- [ ] ", "- [x] ",
            "- ", ">", " ", "\n", "\t",
        ];
        // `](` keeps link targets intact, `::` keeps inline fields intact.
        let after = ["\"", ")", "](", "::", "]", "\n", "\t", " "];

        Self {
            before: before.iter().map(|s| s.to_string()).collect(),
            after: after.iter().map(|s| s.to_string()).collect(),
            expand_when_outside: vec![
                ExpandPair::new("#", ""),
                ExpandPair::new("[[", "]]"),
                ExpandPair::new("", "]]"),
                ExpandPair::new("[[", ""),
                ExpandPair::new("\"", "\""),
                ExpandPair::new("'", "'"),
                ExpandPair::new("(", ")"),
                ExpandPair::new("$", ""),
                ExpandPair::new("", "€"),
                // Trailing spaces keep these from colliding with the trim-after table.
                ExpandPair::trimming_last_space("", ": "),
                ExpandPair::trimming_last_space("[", "] "),
            ],
        }
    }

    /// Tables that never trim nor expand.
    pub fn empty() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
            expand_when_outside: Vec::new(),
        }
    }
}

impl Default for TrimTables {
    fn default() -> Self {
        Self::markdown()
    }
}
