use crate::bio::fasta::parse_fasta;
use crate::bio::sequence::Sequence;
use crate::ExprScopeError;
use indexmap::IndexMap;
use std::path::Path;

/// Placeholder returned for identifiers with no sequence on record.
pub const SEQUENCE_SENTINEL: &str = "*";

/// Protein sequences keyed by gene identifier, in file order.
#[derive(Debug, Clone, Default)]
pub struct SequenceIndex {
    sequences: IndexMap<String, String>,
}

impl SequenceIndex {
    /// An index with no entries; every lookup yields the sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Self, ExprScopeError> {
        let path = path.as_ref();
        let sequences = parse_fasta(path)?;
        let index = Self::from_sequences(sequences);
        tracing::debug!(
            "Indexed {} sequences from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Build an index; on duplicate identifiers the first record wins.
    pub fn from_sequences<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Sequence>,
    {
        let mut map = IndexMap::new();
        for seq in sequences {
            if map.contains_key(&seq.id) {
                tracing::warn!("Duplicate sequence identifier '{}', keeping first", seq.id);
                continue;
            }
            let residues = seq.residues();
            map.insert(seq.id, residues);
        }
        Self { sequences: map }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    /// Never fails: unknown identifiers map to [`SEQUENCE_SENTINEL`].
    pub fn get_or_sentinel(&self, id: &str) -> &str {
        self.get(id).unwrap_or(SEQUENCE_SENTINEL)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sequences.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(id: &str, residues: &str) -> Sequence {
        Sequence::new(id.to_string(), residues.as_bytes().to_vec())
    }

    #[test]
    fn test_unknown_id_yields_sentinel() {
        let index = SequenceIndex::from_sequences(vec![seq("g1", "MKV")]);
        assert_eq!(index.get_or_sentinel("g1"), "MKV");
        assert_eq!(index.get_or_sentinel("missing"), SEQUENCE_SENTINEL);
        assert_eq!(index.get("missing"), None);
    }

    #[test]
    fn test_empty_index_always_sentinel() {
        let index = SequenceIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.get_or_sentinel("anything"), "*");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let index = SequenceIndex::from_sequences(vec![seq("g1", "AAA"), seq("g1", "CCC")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("g1"), Some("AAA"));
    }
}
