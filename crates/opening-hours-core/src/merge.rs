//! Group rules that differ only in their day and time selectors.
//!
//! Each rule is tested against the *founding* member of every existing group,
//! in creation order, and joins the first group that accepts it. The
//! mergeability relation is not assumed to be transitive or symmetric, so the
//! result can depend on input order; that order dependence is part of the
//! observable behaviour.

use crate::rule::OpeningHoursRule;

/// An ordered, non-empty run of rules that can be displayed as one entry.
pub type RuleGroup<'a, R> = Vec<&'a R>;

/// Partition `rules` into groups of mergeable rules.
///
/// Groups appear in the order their founders appear in the input, and
/// members keep their input order. Every rule lands in exactly one group.
///
/// # Examples
///
/// ```
/// use opening_hours_core::{get_mergeable_rules, rules_from_json};
///
/// let rules = rules_from_json(r#"[
///     {"days":[{"start":"Mo"}],"times":[{"start":480,"end":720}]},
///     {"days":[{"start":"Tu"}],"times":[{"start":600,"end":720}]},
///     {"days":[{"start":"Su"}],"modifier":"off"}
/// ]"#).unwrap();
///
/// let groups = get_mergeable_rules(&rules);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].len(), 2);
/// ```
pub fn get_mergeable_rules<R: OpeningHoursRule>(rules: &[R]) -> Vec<RuleGroup<'_, R>> {
    let mut groups: Vec<RuleGroup<'_, R>> = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        match groups
            .iter_mut()
            .find(|group| rule.is_mergeable_with(group[0]))
        {
            Some(group) => {
                log::trace!("rule {index} joins group founded by `{}`", group[0]);
                group.push(rule);
            }
            None => {
                log::trace!("rule {index} founds group {}", groups.len());
                groups.push(vec![rule]);
            }
        }
    }

    log::debug!("grouped {} rules into {} groups", rules.len(), groups.len());
    groups
}
