//! 派生视图：搜索 + 排序
//!
//! A pure projection of the record list, recomputed from the latest list
//! and the current search text / sort mode whenever any of them changes.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use domain_console_gateway::Domain;

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending by creation time.
    #[default]
    Newest,
    /// Ascending by creation time.
    Oldest,
    /// Active records first.
    Active,
    /// Inactive records first.
    Inactive,
    /// Unrecognized mode: keep the list order.
    #[serde(other)]
    Unsorted,
}

impl SortMode {
    /// The selectable modes, in selector order.
    pub const SELECTABLE: [Self; 4] = [Self::Newest, Self::Oldest, Self::Active, Self::Inactive];

    /// Mode name as used in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unsorted => "unsorted",
        }
    }

    /// Selector label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Active => "Active First",
            Self::Inactive => "Inactive First",
            Self::Unsorted => "Unsorted",
        }
    }

    /// Next selectable mode, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Active,
            Self::Active => Self::Inactive,
            Self::Inactive | Self::Unsorted => Self::Newest,
        }
    }

    /// Previous selectable mode, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Newest | Self::Unsorted => Self::Inactive,
            Self::Oldest => Self::Newest,
            Self::Active => Self::Oldest,
            Self::Inactive => Self::Active,
        }
    }
}

impl From<&str> for SortMode {
    /// Unknown names fall back to [`SortMode::Unsorted`].
    fn from(value: &str) -> Self {
        match value {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::Unsorted,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter `domains` by a case-insensitive substring of the `domain` field,
/// then order the survivors by `sort`.
///
/// Every ordering is stable: records with equal keys keep their list order.
pub fn derive_view<'a>(domains: &'a [Domain], search: &str, sort: SortMode) -> Vec<&'a Domain> {
    let needle = search.to_lowercase();
    let mut view: Vec<&Domain> = domains
        .iter()
        .filter(|d| needle.is_empty() || d.domain.to_lowercase().contains(&needle))
        .collect();

    // slice::sort_by_key is stable
    match sort {
        SortMode::Newest => view.sort_by_key(|d| Reverse(d.created_date)),
        SortMode::Oldest => view.sort_by_key(|d| d.created_date),
        SortMode::Active => view.sort_by_key(|d| !d.is_active),
        SortMode::Inactive => view.sort_by_key(|d| d.is_active),
        SortMode::Unsorted => {}
    }

    view
}

/// Search text and sort mode, the local half of the view inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub sort: SortMode,
}

impl ViewQuery {
    #[must_use]
    pub fn new(sort: SortMode) -> Self {
        Self {
            search: String::new(),
            sort,
        }
    }

    /// Apply to `domains`.
    pub fn apply<'a>(&self, domains: &'a [Domain]) -> Vec<&'a Domain> {
        derive_view(domains, &self.search, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_console_gateway::DomainStatus;

    fn domain(id: &str, url: &str, is_active: bool, created_date: i64) -> Domain {
        Domain {
            id: id.to_string(),
            domain: url.to_string(),
            status: DomainStatus::Pending,
            is_active,
            created_date,
        }
    }

    fn sample() -> Vec<Domain> {
        vec![
            domain("1", "a.com", true, 100),
            domain("2", "b.com", false, 200),
        ]
    }

    fn ids(view: &[&Domain]) -> Vec<String> {
        view.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn newest_first() {
        let list = sample();
        assert_eq!(ids(&derive_view(&list, "", SortMode::Newest)), ["2", "1"]);
    }

    #[test]
    fn oldest_first() {
        let list = sample();
        assert_eq!(ids(&derive_view(&list, "", SortMode::Oldest)), ["1", "2"]);
    }

    #[test]
    fn active_first() {
        let list = sample();
        assert_eq!(ids(&derive_view(&list, "", SortMode::Active)), ["1", "2"]);
    }

    #[test]
    fn inactive_first() {
        let list = sample();
        assert_eq!(ids(&derive_view(&list, "", SortMode::Inactive)), ["2", "1"]);
    }

    #[test]
    fn search_filters_exact_subset() {
        let list = sample();
        assert_eq!(ids(&derive_view(&list, "a.com", SortMode::Newest)), ["1"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let list = vec![
            domain("1", "https://Shop.Example.com", true, 1),
            domain("2", "https://blog.example.org", true, 2),
            domain("3", "https://SHOPPING.net", false, 3),
        ];
        assert_eq!(ids(&derive_view(&list, "sHoP", SortMode::Oldest)), ["1", "3"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let list = sample();
        assert!(derive_view(&list, "zzz", SortMode::Newest).is_empty());
    }

    #[test]
    fn active_groups_are_stable() {
        let list = vec![
            domain("1", "a", false, 5),
            domain("2", "b", true, 1),
            domain("3", "c", false, 9),
            domain("4", "d", true, 3),
            domain("5", "e", true, 2),
        ];
        assert_eq!(
            ids(&derive_view(&list, "", SortMode::Active)),
            ["2", "4", "5", "1", "3"]
        );
        assert_eq!(
            ids(&derive_view(&list, "", SortMode::Inactive)),
            ["1", "3", "2", "4", "5"]
        );
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let list = vec![
            domain("x", "a", true, 10),
            domain("y", "b", true, 20),
            domain("z", "c", true, 10),
        ];
        assert_eq!(ids(&derive_view(&list, "", SortMode::Newest)), ["y", "x", "z"]);
        assert_eq!(ids(&derive_view(&list, "", SortMode::Oldest)), ["x", "z", "y"]);
    }

    #[test]
    fn unknown_mode_keeps_filtered_order() {
        let list = vec![
            domain("1", "a.com", true, 300),
            domain("2", "b.org", false, 100),
            domain("3", "c.com", true, 200),
        ];
        let mode = SortMode::from("alphabetical");
        assert_eq!(mode, SortMode::Unsorted);
        assert_eq!(ids(&derive_view(&list, ".com", mode)), ["1", "3"]);
    }

    #[test]
    fn mode_names_round_trip_through_from() {
        for mode in SortMode::SELECTABLE {
            assert_eq!(SortMode::from(mode.as_str()), mode);
        }
    }

    #[test]
    fn next_and_previous_cycle_selectable_modes() {
        let mut mode = SortMode::Newest;
        for expected in [
            SortMode::Oldest,
            SortMode::Active,
            SortMode::Inactive,
            SortMode::Newest,
        ] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
        assert_eq!(SortMode::Newest.previous(), SortMode::Inactive);
        assert_eq!(SortMode::Unsorted.next(), SortMode::Newest);
    }

    #[test]
    fn unknown_mode_deserializes_to_unsorted() {
        let mode: SortMode = serde_json::from_str("\"by-name\"").unwrap();
        assert_eq!(mode, SortMode::Unsorted);
    }

    #[test]
    fn view_query_applies_both_inputs() {
        let list = sample();
        let query = ViewQuery {
            search: "COM".to_string(),
            sort: SortMode::Inactive,
        };
        assert_eq!(ids(&query.apply(&list)), ["2", "1"]);
    }
}
