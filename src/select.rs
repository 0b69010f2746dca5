//! Representative selection: one chunk per cluster centroid.
//!
//! A centroid is a point in embedding space, not a chunk. The selector
//! maps each centroid back to text by nearest-neighbor search — and the
//! *scope* of that search is where the two clustering strategies
//! genuinely differ:
//!
//! ```text
//! Global scope (centroid partition):
//!
//!   centroid C0 ──nearest──▶ any chunk, even one labeled C1
//!
//! Within-cluster scope (hierarchical merge):
//!
//!   centroid C0 ──nearest──▶ only chunks labeled C0
//! ```
//!
//! Under global scope a chunk that happens to sit between two centroids
//! can be selected for both. Callers who need distinct, member-owned
//! representatives should use the hierarchical strategy.

use crate::{Chunk, Error, NeighborSearch, Partition, Result};

/// Scope of the nearest-chunk search for each centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Search all chunks, regardless of label.
    Global,
    /// Search only the chunks labeled with the centroid's cluster.
    WithinCluster,
}

/// Select the representative chunk for each cluster.
///
/// Returns one chunk per centroid (clusters with no members are
/// skipped), in ascending label order — cluster processing order, not
/// document order. Distance ties break toward the lowest chunk index.
///
/// # Errors
///
/// [`Error::Clustering`] if the inputs disagree in shape (label count vs
/// chunk count, embedding count vs chunk count).
pub fn select_representatives(
    chunks: &[Chunk],
    embeddings: &[Vec<f32>],
    partition: &Partition,
    scope: SearchScope,
    search: &dyn NeighborSearch,
) -> Result<Vec<Chunk>> {
    if chunks.is_empty() {
        return Err(Error::Clustering("no chunks to select from".into()));
    }
    if embeddings.len() != chunks.len() {
        return Err(Error::Clustering(format!(
            "{} embeddings for {} chunks",
            embeddings.len(),
            chunks.len()
        )));
    }
    if partition.labels.len() != chunks.len() {
        return Err(Error::Clustering(format!(
            "{} labels for {} chunks",
            partition.labels.len(),
            chunks.len()
        )));
    }

    match scope {
        SearchScope::Global => {
            let hits = search.nearest(embeddings, &partition.centroids);
            Ok(hits.into_iter().map(|idx| chunks[idx].clone()).collect())
        }
        SearchScope::WithinCluster => {
            let mut selected = Vec::with_capacity(partition.centroids.len());

            for (label, centroid) in partition.centroids.iter().enumerate() {
                let member_indices: Vec<usize> = partition
                    .labels
                    .iter()
                    .enumerate()
                    .filter(|(_, &l)| l == label)
                    .map(|(i, _)| i)
                    .collect();

                if member_indices.is_empty() {
                    continue;
                }

                let member_rows: Vec<Vec<f32>> = member_indices
                    .iter()
                    .map(|&i| embeddings[i].clone())
                    .collect();

                let local = search.nearest(&member_rows, std::slice::from_ref(centroid))[0];
                selected.push(chunks[member_indices[local]].clone());
            }

            Ok(selected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExhaustiveSearch;

    fn chunks(n: usize) -> Vec<Chunk> {
        (0..n)
            .map(|i| Chunk::new(format!("chunk {i}"), i * 10, i * 10 + 7, i))
            .collect()
    }

    #[test]
    fn test_within_cluster_picks_members_only() {
        let embeddings = vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![10.0, 10.0],
            vec![11.0, 11.0],
        ];
        let partition = Partition {
            labels: vec![0, 0, 1, 1],
            centroids: vec![vec![0.4, 0.4], vec![10.6, 10.6]],
        };

        let selected = select_representatives(
            &chunks(4),
            &embeddings,
            &partition,
            SearchScope::WithinCluster,
            &ExhaustiveSearch,
        )
        .unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].index, 0);
        assert_eq!(selected[1].index, 3);
    }

    #[test]
    fn test_global_can_cross_cluster_boundaries() {
        // Centroid 1 sits nearest a chunk labeled 0.
        let embeddings = vec![vec![0.0], vec![4.0], vec![10.0]];
        let partition = Partition {
            labels: vec![0, 0, 1],
            centroids: vec![vec![0.0], vec![5.0]],
        };

        let selected = select_representatives(
            &chunks(3),
            &embeddings,
            &partition,
            SearchScope::Global,
            &ExhaustiveSearch,
        )
        .unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].index, 0);
        // Globally nearest to 5.0 is the chunk at 4.0 — a member of cluster 0.
        assert_eq!(selected[1].index, 1);
    }

    #[test]
    fn test_order_follows_labels_not_document() {
        let embeddings = vec![vec![10.0], vec![0.0]];
        let partition = Partition {
            labels: vec![1, 0],
            centroids: vec![vec![0.0], vec![10.0]],
        };

        let selected = select_representatives(
            &chunks(2),
            &embeddings,
            &partition,
            SearchScope::WithinCluster,
            &ExhaustiveSearch,
        )
        .unwrap();

        // Label 0's member is document chunk 1.
        assert_eq!(selected[0].index, 1);
        assert_eq!(selected[1].index, 0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let embeddings = vec![vec![0.0]];
        let partition = Partition {
            labels: vec![0, 0],
            centroids: vec![vec![0.0]],
        };

        assert!(matches!(
            select_representatives(
                &chunks(2),
                &embeddings,
                &partition,
                SearchScope::Global,
                &ExhaustiveSearch,
            ),
            Err(Error::Clustering(_))
        ));
    }
}
