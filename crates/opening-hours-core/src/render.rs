//! Render a rule sequence back into opening_hours text.
//!
//! Empty rules contribute nothing, not even a separator. Every other rule
//! after the first is preceded by the separator of its own
//! [`CombinationKind`](crate::rule::CombinationKind). Canonical and debug
//! output share [`join_rules`] and differ only in how a single rule is
//! stringified.

use crate::rule::OpeningHoursRule;

/// Per-rule stringification used by [`render_rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Grammar-conformant text (`Display`).
    #[default]
    Canonical,
    /// Annotated diagnostic text (`to_debug_string`).
    Debug,
}

/// Concatenate the non-empty rules, stringifying each with `stringify`.
pub fn join_rules<'a, R, I, F>(rules: I, stringify: F) -> String
where
    R: OpeningHoursRule + 'a,
    I: IntoIterator<Item = &'a R>,
    F: Fn(&R) -> String,
{
    let mut result = String::new();
    let mut emitted = 0usize;

    for rule in rules.into_iter().filter(|r| !r.is_empty()) {
        if emitted > 0 {
            result.push_str(rule.kind().separator());
        }
        result.push_str(&stringify(rule));
        emitted += 1;
    }

    log::debug!("rendered {emitted} non-empty rules");
    result
}

/// Render `rules` in the given mode.
pub fn render_rules<'a, R, I>(rules: I, mode: RenderMode) -> String
where
    R: OpeningHoursRule + 'a,
    I: IntoIterator<Item = &'a R>,
{
    match mode {
        RenderMode::Canonical => join_rules(rules, R::to_string),
        RenderMode::Debug => join_rules(rules, R::to_debug_string),
    }
}

/// Render `rules` as a grammar-conformant opening_hours string.
///
/// # Examples
///
/// ```
/// use opening_hours_core::{rules_from_json, rules_to_opening_hours_string};
///
/// let rules = rules_from_json(r#"[
///     {"days":[{"start":"Mo","end":"Fr"}],"times":[{"start":480,"end":1080}]},
///     {"kind":"additive","days":[{"start":"Sa"}],"times":[{"start":600,"end":720}]},
///     {"kind":"fallback","comment":"by appointment"}
/// ]"#).unwrap();
///
/// assert_eq!(
///     rules_to_opening_hours_string(&rules),
///     r#"Mo-Fr 08:00-18:00, Sa 10:00-12:00 || "by appointment""#
/// );
/// ```
pub fn rules_to_opening_hours_string<'a, R, I>(rules: I) -> String
where
    R: OpeningHoursRule + 'a,
    I: IntoIterator<Item = &'a R>,
{
    render_rules(rules, RenderMode::Canonical)
}

/// Render `rules` in the annotated debug form.
pub fn rules_to_opening_hours_debug_string<'a, R, I>(rules: I) -> String
where
    R: OpeningHoursRule + 'a,
    I: IntoIterator<Item = &'a R>,
{
    render_rules(rules, RenderMode::Debug)
}
