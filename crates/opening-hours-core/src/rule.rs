//! The rule contract consumed by grouping and rendering, and the concrete
//! [`Rule`] model implementing it.

use crate::error::Result;
use crate::selector::{
    DateRange, Holiday, RuleModifier, TimeSpan, WeekDayRange, WeekRange, YearRange,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a rule combines with the previous non-empty rule in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombinationKind {
    /// Overrides the previous rule; joined with `"; "`.
    #[default]
    Normal,
    /// Extends the previous rule; joined with `", "`.
    Additive,
    /// Applies only when the previous rule does not; joined with `" || "`.
    Fallback,
}

impl CombinationKind {
    /// Separator emitted in front of a rule of this kind.
    pub fn separator(self) -> &'static str {
        match self {
            CombinationKind::Normal => "; ",
            CombinationKind::Additive => ", ",
            CombinationKind::Fallback => " || ",
        }
    }
}

/// Capabilities the grouper and renderer need from a rule.
///
/// `Display` yields the canonical grammar form and `Clone` is the rule's
/// `copy` operation. Implementations must be side-effect free: the merge
/// predicate in particular may be called many times per grouping.
pub trait OpeningHoursRule: Clone + fmt::Display {
    /// True if the rule carries no effective selector and should not be
    /// rendered at all.
    fn is_empty(&self) -> bool;

    /// How this rule combines with the previous one.
    fn kind(&self) -> CombinationKind;

    /// Whether the two rules differ at most in their day and time selectors.
    ///
    /// Not required to be symmetric or transitive.
    fn is_mergeable_with(&self, other: &Self) -> bool;

    /// Diagnostic rendering with structural annotations.
    fn to_debug_string(&self) -> String;

    fn is_additive(&self) -> bool {
        self.kind() == CombinationKind::Additive
    }

    fn is_fallback(&self) -> bool {
        self.kind() == CombinationKind::Fallback
    }
}

/// One clause of an opening_hours value.
///
/// Every selector list may be empty; a rule with no selectors, no modifier
/// and no comment is empty and is skipped when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub kind: CombinationKind,
    pub twenty_four_seven: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<YearRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<DateRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weeks: Vec<WeekRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holidays: Vec<Holiday>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<WeekDayRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<TimeSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<RuleModifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(T::to_string).collect::<Vec<_>>().join(sep)
}

impl Rule {
    /// Labelled selector parts in grammar order, skipping absent ones.
    ///
    /// Holidays and weekdays are kept apart here; the canonical form joins
    /// them into a single comma-separated selector.
    fn parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = Vec::new();
        if self.twenty_four_seven {
            parts.push(("always", "24/7".to_string()));
        }
        if !self.years.is_empty() {
            parts.push(("years", join(&self.years, ",")));
        }
        if !self.dates.is_empty() {
            parts.push(("dates", join(&self.dates, ",")));
        }
        if !self.weeks.is_empty() {
            parts.push(("weeks", format!("week {}", join(&self.weeks, ","))));
        }
        if !self.holidays.is_empty() {
            parts.push(("holidays", join(&self.holidays, ",")));
        }
        if !self.days.is_empty() {
            parts.push(("days", join(&self.days, ",")));
        }
        if !self.times.is_empty() {
            parts.push(("times", join(&self.times, ",")));
        }
        if let Some(modifier) = self.modifier {
            parts.push(("modifier", modifier.to_string()));
        }
        if let Some(comment) = &self.comment {
            parts.push(("comment", format!("\"{}\"", comment)));
        }
        parts
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out: Vec<String> = Vec::new();
        let mut previous = "";
        for (label, text) in self.parts() {
            match out.last_mut() {
                Some(last) if previous == "holidays" && label == "days" => {
                    last.push(',');
                    last.push_str(&text);
                }
                _ => out.push(text),
            }
            previous = label;
        }
        f.write_str(&out.join(" "))
    }
}

impl OpeningHoursRule for Rule {
    fn is_empty(&self) -> bool {
        !self.twenty_four_seven
            && self.years.is_empty()
            && self.dates.is_empty()
            && self.weeks.is_empty()
            && self.holidays.is_empty()
            && self.days.is_empty()
            && self.times.is_empty()
            && self.modifier.is_none()
            && self.comment.is_none()
    }

    fn kind(&self) -> CombinationKind {
        self.kind
    }

    fn is_mergeable_with(&self, other: &Self) -> bool {
        // Days and times are not compared.
        self.kind == other.kind
            && self.twenty_four_seven == other.twenty_four_seven
            && self.years == other.years
            && self.dates == other.dates
            && self.weeks == other.weeks
            && self.holidays == other.holidays
            && self.modifier == other.modifier
            && self.comment == other.comment
    }

    fn to_debug_string(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        match self.kind {
            CombinationKind::Normal => {}
            CombinationKind::Additive => out.push("kind[additive]".to_string()),
            CombinationKind::Fallback => out.push("kind[fallback]".to_string()),
        }
        out.extend(
            self.parts()
                .into_iter()
                .map(|(label, text)| format!("{}[{}]", label, text)),
        );
        out.join(" ")
    }
}

/// Load a JSON array of rules.
///
/// # Errors
/// Returns `OpeningHoursError::Json` if the input is not valid JSON or does
/// not match the rule schema (including unknown weekday abbreviations).
///
/// # Examples
///
/// ```
/// use opening_hours_core::rules_from_json;
///
/// let rules = rules_from_json(r#"[{"days":[{"start":"Mo","end":"Fr"}],"times":[{"start":480,"end":1080}]}]"#).unwrap();
/// assert_eq!(rules[0].to_string(), "Mo-Fr 08:00-18:00");
/// ```
pub fn rules_from_json(json: &str) -> Result<Vec<Rule>> {
    let rules: Vec<Rule> = serde_json::from_str(json)?;
    log::debug!("loaded {} rules", rules.len());
    Ok(rules)
}
