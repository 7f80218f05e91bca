//! Salary range parsing for the minimum-salary filter.

use serde::Serialize;

use crate::ui::counter::format_thousands;

/// Threshold values offered by the salary filter control.
pub const SALARY_THRESHOLDS: [u64; 4] = [50_000, 75_000, 100_000, 125_000];

/// Reads the lower bound of a range such as `"$80,000 - $100,000"`: the text
/// before the first range separator with every non-digit removed.
///
/// Returns `None` when no digits remain or the value overflows `u64`.
pub fn parse_minimum_salary(range: &str) -> Option<u64> {
    let lower = range.split(['-', '–']).next().unwrap_or_default();
    let digits: String = lower.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Total form of [`parse_minimum_salary`]: unreadable minimums count as 0, so
/// such postings only pass a threshold of 0.
pub fn minimum_salary(range: &str) -> u64 {
    parse_minimum_salary(range).unwrap_or(0)
}

pub fn meets_threshold(range: &str, threshold: u64) -> bool {
    minimum_salary(range) >= threshold
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryOption {
    pub value: u64,
    pub label: String,
}

pub fn salary_options() -> Vec<SalaryOption> {
    SALARY_THRESHOLDS
        .iter()
        .map(|&value| SalaryOption {
            value,
            label: format!("${}+", format_thousands(value)),
        })
        .collect()
}
