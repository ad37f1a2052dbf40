//! Classification of categorical codes.
//!
//! A code is matched either numerically or textually, decided per code:
//!
//! - **Numeric**: ASCII digits with at most one `.` and at least one digit
//!   (`1`, `2.5`, `.5`, `3.`). Compared by value against integer and float
//!   cells after parsing the code as `f64`.
//! - **Text**: anything else, compared by exact equality against text cells.
//!
//! Codes such as `1.2.3` look numeric once every dot is dropped but are not
//! valid numbers. They are matched as text and reported as ambiguous.

use crate::table::CellValue;

/// How a categorical code is compared against cell values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodeMatch {
    Numeric(f64),
    Text,
}

/// A categorical code with its matching strategy resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCode<'a> {
    pub code: &'a str,
    pub matcher: CodeMatch,
    /// True when the code only passes the dot-stripping digit check.
    pub ambiguous: bool,
}

impl<'a> CategoryCode<'a> {
    pub fn classify(code: &'a str) -> Self {
        let matcher = if is_strict_numeric(code) {
            code.parse::<f64>()
                .map_or(CodeMatch::Text, CodeMatch::Numeric)
        } else {
            CodeMatch::Text
        };
        let ambiguous = matches!(matcher, CodeMatch::Text) && is_loose_numeric(code);
        Self {
            code,
            matcher,
            ambiguous,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.matcher, CodeMatch::Numeric(_))
    }

    /// Returns true when `value` holds this code.
    ///
    /// Missing cells never match.
    pub fn matches(&self, value: &CellValue) -> bool {
        match (self.matcher, value) {
            (CodeMatch::Numeric(code), CellValue::Number(cell)) => *cell == code,
            (CodeMatch::Numeric(code), CellValue::Integer(cell)) => *cell as f64 == code,
            (CodeMatch::Text, CellValue::Text(cell)) => cell == self.code,
            _ => false,
        }
    }

    /// The `"{code}: {description}"` label written in place of a match.
    pub fn label(&self, description: &str) -> String {
        format!("{}: {description}", self.code)
    }
}

/// Digits with at most one decimal point and at least one digit.
pub fn is_strict_numeric(code: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in code.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Digits once every `.` is removed.
fn is_loose_numeric(code: &str) -> bool {
    let stripped: String = code.chars().filter(|ch| *ch != '.').collect();
    !stripped.is_empty() && stripped.chars().all(|ch| ch.is_ascii_digit())
}
