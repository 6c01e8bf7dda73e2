//! Canonical text form shared by catalog fields and candidate input.
//!
//! Output contains only `a-z`, `0-9`, commas and single spaces.

use std::collections::BTreeSet;

pub const SKILL_JOIN: &str = ", ";

/// Separators accepted between values of a multi-valued location field.
/// They are rewritten to commas before cleaning, which would otherwise turn them into spaces.
pub const LOCATION_DELIMITERS: [char; 4] = [',', ';', '/', '|'];

pub fn clean_text(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let mapped: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ',' {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join raw skill columns with ", " before cleaning, so a multi-word skill
/// in one column never merges with the next column's skill.
pub fn join_skill_columns(columns: &[Option<&str>]) -> String {
    let joined = columns
        .iter()
        .filter_map(|column| column.map(str::trim))
        .filter(|column| !column.is_empty())
        .collect::<Vec<_>>()
        .join(SKILL_JOIN);

    clean_text(Some(&joined))
}

/// Clean a location field into `value, value, ...` form.
pub fn clean_location(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    clean_text(Some(&raw.replace(LOCATION_DELIMITERS, ",")))
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated skill tokens in first-seen order; repeats are dropped.
pub fn split_skills(skills: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(str::to_string)
        .collect()
}
