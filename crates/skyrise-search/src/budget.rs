//! Budget string extraction for client records.
//!
//! Record budgets are human-readable strings (`"$1-2M"`, `"$600K"`)
//! and are re-parsed on every comparison; there is no cached numeric
//! form. Values that yield no numeric token degrade to `0`.

use anyhow::Result;
use regex::Regex;

pub struct BudgetParser {
    number: Regex,
    range_m: Regex,
    range_k: Regex,
}

impl BudgetParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            number: Regex::new(r"\$?([\d.]+)")?,
            range_m: Regex::new(r"(?i)\$?([\d.]+)\s*[-–]\s*([\d.]+)\s*m")?,
            range_k: Regex::new(r"(?i)\$?([\d.]+)\s*[-–]\s*([\d.]+)\s*k")?,
        })
    }

    /// First numeric token scaled by the magnitude suffix found
    /// anywhere in the string: "m" means millions, "k" thousands.
    pub fn single_value(&self, budget: &str) -> f64 {
        let Some(caps) = self.number.captures(budget) else {
            return 0.0;
        };
        let num = float_prefix(&caps[1]);
        let lower = budget.to_lowercase();
        if lower.contains('m') {
            num * 1_000_000.0
        } else if lower.contains('k') {
            num * 1_000.0
        } else {
            num
        }
    }

    /// Upper bound of a dash range with an explicit M/K suffix, else
    /// the single-value rule. This is the record's budget ceiling,
    /// compared against a query's floor.
    pub fn max_value(&self, budget: &str) -> f64 {
        if let Some(caps) = self.range_m.captures(budget) {
            return float_prefix(&caps[2]) * 1_000_000.0;
        }
        if let Some(caps) = self.range_k.captures(budget) {
            return float_prefix(&caps[2]) * 1_000.0;
        }
        self.single_value(budget)
    }
}

/// Lenient float parse: the longest leading `digits[.digits]` prefix
/// counts, anything after it is ignored. No digits at all yields 0.
pub(crate) fn float_prefix(token: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in token.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }
    let prefix = &token[..end];
    if prefix.bytes().any(|b| b.is_ascii_digit()) {
        prefix.parse().unwrap_or(0.0)
    } else {
        0.0
    }
}
