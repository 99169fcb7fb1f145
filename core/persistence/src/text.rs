//! FILENAME: core/persistence/src/text.rs
//! PURPOSE: Renders a table as aligned plain text.
//! CONTEXT: Every cell is padded with one space on each side. Numeric columns
//! are right-aligned, the rest left-aligned. Widths are display columns, so wide (CJK)
//! characters count as two.

use tabula_engine::{Table, Value};
use unicode_width::UnicodeWidthStr;

// ============================================================================
// DECORATIONS
// ============================================================================

/// A horizontal rule. `horiz` is repeated across each column (padding
/// included); an empty `horiz` omits the rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub horiz: String,
    pub left: String,
    pub mid: String,
    pub right: String,
}

impl Rule {
    pub fn new(horiz: &str, left: &str, mid: &str, right: &str) -> Self {
        Self {
            horiz: horiz.to_string(),
            left: left.to_string(),
            mid: mid.to_string(),
            right: right.to_string(),
        }
    }

    /// A plain run of `horiz` with no delimiters.
    pub fn plain(horiz: &str) -> Self {
        Self::new(horiz, "", "", "")
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Delimiters around and between the cells of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delimiters {
    pub left: String,
    pub mid: String,
    pub right: String,
}

impl Delimiters {
    pub fn new(left: &str, mid: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            mid: mid.to_string(),
            right: right.to_string(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Rules above the header, between header and body, and below the body,
/// plus the cell delimiters for header and body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorations {
    pub upper: Rule,
    pub middle: Rule,
    pub bottom: Rule,
    pub header: Delimiters,
    pub row: Delimiters,
}

impl Decorations {
    /// Only a dashed rule under the header.
    pub fn middle_rule() -> Self {
        Self {
            upper: Rule::none(),
            middle: Rule::plain("-"),
            bottom: Rule::none(),
            header: Delimiters::none(),
            row: Delimiters::none(),
        }
    }

    pub fn upper_and_middle() -> Self {
        Self {
            upper: Rule::plain("-"),
            ..Self::middle_rule()
        }
    }

    pub fn middle_and_bottom() -> Self {
        Self {
            bottom: Rule::plain("-"),
            ..Self::middle_rule()
        }
    }

    /// Dashed rules above, below and under the header.
    pub fn ruled() -> Self {
        Self {
            upper: Rule::plain("-"),
            bottom: Rule::plain("-"),
            ..Self::middle_rule()
        }
    }

    /// Header rule broken by a space between columns, and a space between
    /// cells.
    pub fn spaced() -> Self {
        Self {
            upper: Rule::none(),
            middle: Rule::new("-", "", " ", ""),
            bottom: Rule::none(),
            header: Delimiters::new("", " ", ""),
            row: Delimiters::new("", " ", ""),
        }
    }

    /// `+---+` rules and `|` delimiters around every cell.
    pub fn boxed() -> Self {
        Self {
            upper: Rule::new("-", "+", "+", "+"),
            middle: Rule::new("-", "+", "+", "+"),
            bottom: Rule::new("-", "+", "+", "+"),
            header: Delimiters::new("|", "|", "|"),
            row: Delimiters::new("|", "|", "|"),
        }
    }
}

impl Default for Decorations {
    fn default() -> Self {
        Self::boxed()
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Lines are joined with `\n`, without a trailing newline. A table without
/// columns renders as the empty string.
pub fn render(table: &Table, decorations: &Decorations) -> String {
    let n = table.width();
    if n == 0 {
        return String::new();
    }

    let header: Vec<String> = table.header().iter().map(str::to_string).collect();
    let body: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.iter().map(Value::to_text).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|name| UnicodeWidthStr::width(name.as_str())).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    // Unbound kinds (no rows) align left.
    let right: Vec<bool> = (0..n)
        .map(|j| table.types().get(j).is_some_and(|kind| kind.is_numeric()))
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.extend(rule_line(&decorations.upper, &widths));
    lines.push(cell_line(&decorations.header, &header, &widths, &right));
    lines.extend(rule_line(&decorations.middle, &widths));
    for cells in &body {
        lines.push(cell_line(&decorations.row, cells, &widths, &right));
    }
    lines.extend(rule_line(&decorations.bottom, &widths));
    lines.join("\n")
}

fn rule_line(rule: &Rule, widths: &[usize]) -> Option<String> {
    if rule.horiz.is_empty() {
        return None;
    }
    let segments: Vec<String> = widths.iter().map(|w| rule.horiz.repeat(w + 2)).collect();
    Some(format!("{}{}{}", rule.left, segments.join(&rule.mid), rule.right))
}

fn cell_line(delimiters: &Delimiters, cells: &[String], widths: &[usize], right: &[bool]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(right)
        .map(|((cell, &width), &right)| {
            let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell.as_str())));
            if right {
                format!(" {}{} ", fill, cell)
            } else {
                format!(" {}{} ", cell, fill)
            }
        })
        .collect();
    format!("{}{}{}", delimiters.left, padded.join(&delimiters.mid), delimiters.right)
}
