use serde::Serialize;
use std::collections::BTreeSet;

/// A runnable command exposed by the target CLI together with every literal
/// string that invokes it.
///
/// The primary name is always a member of `aliases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRecord {
    pub primary_name: String,
    pub aliases: BTreeSet<String>,
}

impl CommandRecord {
    pub fn new<I, S>(primary_name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let primary_name = primary_name.into();
        let mut aliases: BTreeSet<String> = aliases.into_iter().map(Into::into).collect();
        aliases.insert(primary_name.clone());
        Self {
            primary_name,
            aliases,
        }
    }

    /// Aliases other than the primary name
    pub fn extra_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .map(String::as_str)
            .filter(move |a| *a != self.primary_name)
    }
}

/// Commands reported by one invocation of the target binary, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventorySet {
    records: Vec<CommandRecord>,
}

impl InventorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, merging aliases into an existing record with the same
    /// primary name.
    pub fn push(&mut self, record: CommandRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.primary_name == record.primary_name)
        {
            Some(existing) => existing.aliases.extend(record.aliases),
            None => self.records.push(record),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }
}

impl FromIterator<CommandRecord> for InventorySet {
    fn from_iter<T: IntoIterator<Item = CommandRecord>>(iter: T) -> Self {
        let mut set = InventorySet::new();
        for record in iter {
            set.push(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a InventorySet {
    type Item = &'a CommandRecord;
    type IntoIter = std::slice::Iter<'a, CommandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Outcome of matching an inventory against a source corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageResult {
    pub covered: BTreeSet<String>,
    /// Uncovered commands, sorted by primary name
    pub gaps: Vec<CommandRecord>,
    pub total: usize,
}

impl CoverageResult {
    pub fn covered_count(&self) -> usize {
        self.covered.len()
    }

    pub fn uncovered_count(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_covered(&self, primary_name: &str) -> bool {
        self.covered.contains(primary_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_always_contains_primary() {
        let record = CommandRecord::new("fcli ssc issue list", ["issues ls"]);
        assert!(record.aliases.contains("fcli ssc issue list"));
        assert!(record.aliases.contains("issues ls"));
        assert_eq!(record.extra_aliases().collect::<Vec<_>>(), vec!["issues ls"]);
    }

    #[test]
    fn test_inventory_merges_duplicate_primaries() {
        let inventory: InventorySet = vec![
            CommandRecord::new("fcli tool list", ["ls"]),
            CommandRecord::new("fcli fod app list", Vec::<String>::new()),
            CommandRecord::new("fcli tool list", ["lst"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(inventory.len(), 2);
        let first = &inventory.records()[0];
        assert_eq!(first.primary_name, "fcli tool list");
        assert_eq!(first.aliases.len(), 3);
    }
}
