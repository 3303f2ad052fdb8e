//! Small text helpers for lenient weekday handling.

/// Lower-case `s` and upper-case its first character.
///
/// ```
/// use opening_hours_core::util::capitalize;
///
/// assert_eq!(capitalize("mO"), "Mo");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}

/// Map a German two-letter weekday abbreviation to its English grammar form.
///
/// Matching is case-insensitive. Anything unrecognised maps to `"Su"`, which
/// covers the German `So` without a dedicated arm.
pub fn de_weekday_to_en(s: &str) -> &'static str {
    match s.to_lowercase().as_str() {
        "mo" => "Mo",
        "di" => "Tu",
        "mi" => "We",
        "do" => "Th",
        "fr" => "Fr",
        "sa" => "Sa",
        _ => "Su",
    }
}
