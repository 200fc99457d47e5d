//! Grouping of repository records into per-language star/fork totals.

use crate::github::types::Repository;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// One chart row: summed stars and forks for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTotals {
    pub language: String,
    pub stars: u64,
    pub forks: u64,
}

/// Distinct languages observed in a record set, sorted alphabetically.
/// Records without a detected language are skipped.
pub fn language_options(records: &[Repository]) -> Vec<String> {
    let mut languages: Vec<String> = records
        .iter()
        .filter_map(|repo| repo.language.clone())
        .collect();
    languages.sort();
    languages.dedup();
    languages
}

/// Filters `records` to the selected languages, groups by language and sums
/// stars and forks per group. Rows come back sorted by language, so the
/// output is deterministic for identical inputs.
///
/// An empty selection, or a selection matching no record, yields an empty
/// vec; the caller renders an empty chart rather than an error.
pub fn aggregate(records: &[Repository], selected: &HashSet<String>) -> Vec<LanguageTotals> {
    let mut totals: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for repo in records {
        let Some(language) = repo.language.as_deref() else {
            continue;
        };
        if !selected.contains(language) {
            continue;
        }
        let entry = totals.entry(language).or_default();
        entry.0 += repo.stargazers_count;
        entry.1 += repo.forks_count;
    }

    totals
        .into_iter()
        .map(|(language, (stars, forks))| LanguageTotals {
            language: language.to_string(),
            stars,
            forks,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Repository> {
        vec![
            Repository::new(Some("Go"), 10, 2),
            Repository::new(Some("Go"), 5, 1),
            Repository::new(Some("Rust"), 7, 3),
            Repository::new(None, 100, 50),
        ]
    }

    fn selection(languages: &[&str]) -> HashSet<String> {
        languages.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_and_sums_selected_languages() {
        let rows = aggregate(&sample_records(), &selection(&["Go", "Rust"]));
        assert_eq!(
            rows,
            vec![
                LanguageTotals {
                    language: "Go".to_string(),
                    stars: 15,
                    forks: 3,
                },
                LanguageTotals {
                    language: "Rust".to_string(),
                    stars: 7,
                    forks: 3,
                },
            ]
        );
    }

    #[test]
    fn narrower_selection_drops_unselected_groups() {
        let rows = aggregate(&sample_records(), &selection(&["Go"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].language, "Go");
        assert_eq!(rows[0].stars, 15);
        assert_eq!(rows[0].forks, 3);
    }

    #[test]
    fn empty_selection_yields_empty_rows() {
        let rows = aggregate(&sample_records(), &HashSet::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn one_row_per_distinct_selected_language() {
        let rows = aggregate(&sample_records(), &selection(&["Go", "Rust", "Zig"]));
        // "Zig" is selected but absent from the input, so no row for it.
        let languages: Vec<&str> = rows.iter().map(|r| r.language.as_str()).collect();
        assert_eq!(languages, vec!["Go", "Rust"]);
    }

    #[test]
    fn totals_are_conserved_over_the_filtered_input() {
        let records = sample_records();
        let selected = selection(&["Go", "Rust"]);
        let rows = aggregate(&records, &selected);

        let filtered: Vec<&Repository> = records
            .iter()
            .filter(|r| r.language.as_deref().is_some_and(|l| selected.contains(l)))
            .collect();
        let input_stars: u64 = filtered.iter().map(|r| r.stargazers_count).sum();
        let input_forks: u64 = filtered.iter().map(|r| r.forks_count).sum();

        assert_eq!(rows.iter().map(|r| r.stars).sum::<u64>(), input_stars);
        assert_eq!(rows.iter().map(|r| r.forks).sum::<u64>(), input_forks);
    }

    #[test]
    fn null_language_records_never_surface() {
        let records = sample_records();
        assert_eq!(language_options(&records), vec!["Go", "Rust"]);

        // Even a selection cannot resurrect them: there is no key to select.
        let every_language = selection(&["Go", "Rust"]);
        let rows = aggregate(&records, &every_language);
        let total_stars: u64 = rows.iter().map(|r| r.stars).sum();
        assert_eq!(total_stars, 22); // excludes the 100-star null-language record
    }

    #[test]
    fn options_are_sorted_and_deduplicated() {
        let records = vec![
            Repository::new(Some("Rust"), 1, 0),
            Repository::new(Some("C"), 2, 0),
            Repository::new(Some("Rust"), 3, 0),
            Repository::new(None, 4, 0),
        ];
        assert_eq!(language_options(&records), vec!["C", "Rust"]);
    }

    #[test]
    fn empty_input_yields_empty_options_and_rows() {
        assert!(language_options(&[]).is_empty());
        assert!(aggregate(&[], &selection(&["Go"])).is_empty());
    }
}
