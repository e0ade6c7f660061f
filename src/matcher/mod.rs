//! Alias matching against the source corpus.
//!
//! A command is covered when any invocation string for it appears verbatim
//! in any corpus file. Matching is plain, case-sensitive substring
//! containment with no tokenization, so a short alias such as `ls` will match
//! almost any corpus. That imprecision is accepted: changing it would change
//! which commands are reported as covered.

pub mod corpus;

pub use corpus::{CorpusFile, SourceCorpus};

use crate::core::{CommandRecord, CoverageResult, InventorySet};
use std::collections::BTreeSet;
use tracing::trace;

/// Token that invokes the tool from a shell, stripped to form bare variants.
pub const DEFAULT_INVOCATION_PREFIX: &str = "fcli ";

/// All strings that count as evidence of `alias` being exercised.
///
/// Always contains `alias` itself; an alias starting with a non-empty
/// `prefix` also yields the form with the prefix removed.
pub fn expand_variants(alias: &str, prefix: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(alias.to_string());
    if !prefix.is_empty() {
        if let Some(bare) = alias.strip_prefix(prefix) {
            variants.insert(bare.to_string());
        }
    }
    variants
}

/// Whether any variant of any alias of `record` occurs in the corpus
pub fn is_covered(record: &CommandRecord, corpus: &SourceCorpus, prefix: &str) -> bool {
    record
        .aliases
        .iter()
        .flat_map(|alias| expand_variants(alias, prefix))
        .any(|variant| {
            let hit = corpus.contains(&variant);
            if hit {
                trace!(command = %record.primary_name, variant = %variant, "Matched");
            }
            hit
        })
}

/// Partition the inventory into covered commands and gaps.
pub fn match_inventory(
    inventory: &InventorySet,
    corpus: &SourceCorpus,
    prefix: &str,
) -> CoverageResult {
    let mut covered = BTreeSet::new();
    let mut gaps = Vec::new();

    for record in inventory {
        if is_covered(record, corpus, prefix) {
            covered.insert(record.primary_name.clone());
        } else {
            gaps.push(record.clone());
        }
    }
    gaps.sort_by(|a, b| a.primary_name.cmp(&b.primary_name));

    CoverageResult {
        covered,
        gaps,
        total: inventory.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inventory(records: Vec<CommandRecord>) -> InventorySet {
        records.into_iter().collect()
    }

    #[test]
    fn test_expand_variants_strips_prefix() {
        let variants = expand_variants("fcli ssc issue list", "fcli ");
        assert_eq!(
            variants.into_iter().collect::<Vec<_>>(),
            vec!["fcli ssc issue list".to_string(), "ssc issue list".to_string()]
        );
    }

    #[test]
    fn test_expand_variants_leaves_other_aliases_alone() {
        assert_eq!(expand_variants("issues ls", "fcli ").len(), 1);
        assert_eq!(expand_variants("fclix tool", "fcli ").len(), 1);
        assert_eq!(expand_variants("fcli tool list", "").len(), 1);
    }

    #[test]
    fn test_fully_qualified_invocation_covers_command() {
        let inv = inventory(vec![CommandRecord::new(
            "fcli ssc issue list",
            ["issues ls"],
        )]);
        let corpus = SourceCorpus::from_texts(["fcli ssc issue list --project X"]);

        let result = match_inventory(&inv, &corpus, DEFAULT_INVOCATION_PREFIX);
        assert!(result.is_covered("fcli ssc issue list"));
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_bare_invocation_covers_command() {
        let inv = inventory(vec![CommandRecord::new("fcli ssc issue list", Vec::<String>::new())]);
        let corpus = SourceCorpus::from_texts([r#"def result = Fcli.run("ssc issue list")"#]);

        let result = match_inventory(&inv, &corpus, DEFAULT_INVOCATION_PREFIX);
        assert_eq!(result.covered_count(), 1);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let inv = inventory(vec![CommandRecord::new("fcli tool list", Vec::<String>::new())]);
        let corpus = SourceCorpus::from_texts(["FCLI TOOL LIST"]);

        let result = match_inventory(&inv, &corpus, DEFAULT_INVOCATION_PREFIX);
        assert_eq!(result.uncovered_count(), 1);
    }

    #[test]
    fn test_gaps_are_sorted_and_keep_aliases() {
        let inv = inventory(vec![
            CommandRecord::new("fcli ssc av ls", ["fcli ssc appversion list"]),
            CommandRecord::new("fcli fod rel ls", Vec::<String>::new()),
            CommandRecord::new("fcli config clear", Vec::<String>::new()),
        ]);
        let corpus = SourceCorpus::from_texts(["run('config clear')"]);

        let result = match_inventory(&inv, &corpus, DEFAULT_INVOCATION_PREFIX);
        let gap_names: Vec<&str> = result.gaps.iter().map(|g| g.primary_name.as_str()).collect();
        assert_eq!(gap_names, vec!["fcli fod rel ls", "fcli ssc av ls"]);
        assert_eq!(result.gaps[1].aliases.len(), 2);
        assert_eq!(result.covered_count() + result.uncovered_count(), result.total);
    }

    #[test]
    fn test_empty_corpus_covers_nothing() {
        let inv = inventory(vec![CommandRecord::new("fcli tool list", ["ls"])]);
        let result = match_inventory(&inv, &SourceCorpus::default(), DEFAULT_INVOCATION_PREFIX);
        assert_eq!(result.covered_count(), 0);
        assert_eq!(result.total, 1);
    }
}
