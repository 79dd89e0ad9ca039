//! A single cluster of entries and its centroid

use super::entry::Entry;
use super::similarity::cosine_similarity;
use crate::domain::DomainError;

/// Bounded cluster of entries sharing one centroid.
///
/// The centroid is the elementwise mean of every vector in the layer, or
/// empty while the layer has never received an entry.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    entries: Vec<Entry>,
    centroid: Vec<f32>,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn centroid(&self) -> &[f32] {
        &self.centroid
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and fold its vector into the running mean.
    ///
    /// The caller guarantees the vector matches the layer's dimension.
    pub fn push(&mut self, entry: Entry) {
        let n = self.entries.len() as f64;

        if self.entries.is_empty() {
            self.centroid = entry.vector().to_vec();
        } else {
            for (c, &v) in self.centroid.iter_mut().zip(entry.vector()) {
                *c = ((f64::from(*c) * n + f64::from(v)) / (n + 1.0)) as f32;
            }
        }

        self.entries.push(entry);
    }

    /// Similarity of the query to this layer's centroid
    pub fn centroid_similarity(&self, query: &[f32]) -> Result<f32, DomainError> {
        cosine_similarity(&self.centroid, query)
    }

    /// Position and score of the entry most similar to the query
    pub fn best_entry(&self, query: &[f32]) -> Result<Option<(usize, f32)>, DomainError> {
        best_of(
            self.entries
                .iter()
                .enumerate()
                .map(|(i, entry)| cosine_similarity(entry.vector(), query).map(|s| (i, s))),
        )
    }
}

/// Highest score wins; ties keep the lowest index
pub(super) fn best_of<I>(scores: I) -> Result<Option<(usize, f32)>, DomainError>
where
    I: IntoIterator<Item = Result<(usize, f32), DomainError>>,
{
    let mut best: Option<(usize, f32)> = None;

    for score in scores {
        let (index, similarity) = score?;

        match best {
            Some((_, current)) if similarity <= current => {}
            _ => best = Some((index, similarity)),
        }
    }

    Ok(best)
}
