// Dictionary — token/id mapping and bag-of-words conversion.
//
// Ids are assigned in first-seen order over the document collection, so a
// given collection always produces the same vocabulary. That ordering is
// load-bearing: the trainer's determinism contract starts here.

use std::collections::HashMap;

/// Term-to-identifier mapping built from a tokenized document collection.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
}

impl Dictionary {
    /// Build the vocabulary from every token of every document,
    /// assigning ids in first-seen order.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut dict = Self::default();
        for doc in documents {
            for token in doc {
                if !dict.token_to_id.contains_key(token) {
                    let id = dict.id_to_token.len();
                    dict.id_to_token.push(token.clone());
                    dict.token_to_id.insert(token.clone(), id);
                }
            }
        }
        dict
    }

    /// Convert a document into a sparse term-id/count vector, sorted by id.
    /// Tokens outside the vocabulary are skipped.
    pub fn doc_to_bow(&self, document: &[String]) -> Vec<(usize, u32)> {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in document {
            if let Some(&id) = self.token_to_id.get(token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        let mut bow: Vec<(usize, u32)> = counts.into_iter().collect();
        bow.sort_unstable_by_key(|&(id, _)| id);
        bow
    }

    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(|s| s.as_str())
    }

    pub fn id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }
}
