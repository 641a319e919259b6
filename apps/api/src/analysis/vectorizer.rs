//! Vocabulary Vectorizer — builds a shared term index over two normalized documents
//! and counts term frequencies against it.

use std::collections::BTreeMap;

use crate::analysis::normalize::tokens;

/// Distinct tokens across both compared documents, in sorted order.
///
/// The position of a term in the vocabulary is its slot in every frequency vector
/// produced for the same comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Builds the vocabulary from already-normalized documents.
    pub fn from_documents(docs: &[&str]) -> Self {
        let mut index: BTreeMap<String, usize> = docs
            .iter()
            .flat_map(|doc| tokens(doc))
            .map(|term| (term.to_string(), 0))
            .collect();

        for (position, slot) in index.values_mut().enumerate() {
            *slot = position;
        }

        Self { index }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Counts occurrences of each vocabulary term in `normalized`.
    /// Tokens outside the vocabulary are ignored.
    pub fn term_frequencies(&self, normalized: &str) -> Vec<u32> {
        let mut counts = vec![0_u32; self.len()];
        for term in tokens(normalized) {
            if let Some(position) = self.position(term) {
                counts[position] += 1;
            }
        }
        counts
    }
}

/// Two frequency vectors aligned on one vocabulary.
#[derive(Debug, Clone)]
pub struct Vectorized {
    pub vec_a: Vec<u32>,
    pub vec_b: Vec<u32>,
    pub vocabulary: Vocabulary,
}

/// Vectorizes two normalized documents over their shared vocabulary.
pub fn vectorize(doc_a: &str, doc_b: &str) -> Vectorized {
    let vocabulary = Vocabulary::from_documents(&[doc_a, doc_b]);
    let vec_a = vocabulary.term_frequencies(doc_a);
    let vec_b = vocabulary.term_frequencies(doc_b);

    Vectorized {
        vec_a,
        vec_b,
        vocabulary,
    }
}
