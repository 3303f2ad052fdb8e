//! # opening-hours-core
//!
//! Post-processing for already-parsed OpenStreetMap `opening_hours` rules.
//!
//! Two independent operations work on any type implementing
//! [`OpeningHoursRule`]:
//!
//! - grouping rules that only differ in their day/time selectors so they can
//!   be displayed as one entry ([`get_mergeable_rules`]), and
//! - rendering a rule sequence back into opening_hours text, picking the
//!   `; `, `, ` or ` || ` separator from each rule's combination kind
//!   ([`rules_to_opening_hours_string`], [`rules_to_opening_hours_debug_string`]).
//!
//! ## Quick start
//!
//! ```rust
//! use opening_hours_core::{get_mergeable_rules, rules_from_json, rules_to_opening_hours_string};
//!
//! let rules = rules_from_json(r#"[
//!     {"days":[{"start":"Mo","end":"Fr"}],"times":[{"start":540,"end":1020}]},
//!     {"days":[{"start":"Sa"}],"times":[{"start":600,"end":840}]}
//! ]"#).unwrap();
//!
//! assert_eq!(rules_to_opening_hours_string(&rules), "Mo-Fr 09:00-17:00; Sa 10:00-14:00");
//! assert_eq!(get_mergeable_rules(&rules).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`rule`] — the rule contract and the concrete [`Rule`] model
//! - [`selector`] — year, date, week, holiday, weekday and time selectors
//! - [`merge`] — founder-based grouping of mergeable rules
//! - [`render`] — canonical and debug rendering of rule sequences
//! - [`month`] — calendar month names
//! - [`util`] — weekday name helpers
//! - [`error`] — Error types

pub mod error;
pub mod merge;
pub mod month;
pub mod render;
pub mod rule;
pub mod selector;
pub mod util;

pub use error::OpeningHoursError;
pub use merge::{get_mergeable_rules, RuleGroup};
pub use month::Month;
pub use render::{
    render_rules, rules_to_opening_hours_debug_string, rules_to_opening_hours_string, RenderMode,
};
pub use rule::{rules_from_json, CombinationKind, OpeningHoursRule, Rule};
