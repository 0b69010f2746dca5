//! Clustering strategy dispatch.
//!
//! Two interchangeable ways to group chunk embeddings, modeled as a
//! closed enum rather than open dynamic dispatch — there are exactly two
//! strategies, and callers pick one at construction:
//!
//! | Strategy | Algorithm | Centroids | Representative scope |
//! |----------|-----------|-----------|----------------------|
//! | [`CentroidPartition`](Strategy::CentroidPartition) | k-means | algorithm output | global |
//! | [`HierarchicalMerge`](Strategy::HierarchicalMerge) | agglomerative (Ward) | explicit member means | within cluster |
//!
//! The representative-scope column is a real behavioral difference, not
//! an implementation detail: the centroid-partition strategy searches
//! for each centroid's nearest chunk across *all* chunks, so a chunk
//! from a neighboring cluster can stand in for a centroid it sits close
//! to. The hierarchical strategy only ever picks a cluster's own member.
//! See [`SearchScope`](crate::SearchScope).

use crate::{Agglomerative, Error, Kmeans, NeighborSearch, Result, SearchScope};

/// A clustering of embeddings: one label per row plus a centroid per
/// distinct label.
///
/// Labels are contiguous in `0..centroids.len()`.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Cluster label per embedding row.
    pub labels: Vec<usize>,
    /// Centroid per cluster, indexed by label.
    pub centroids: Vec<Vec<f32>>,
}

/// Clustering strategy for grouping chunk embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Iterative centroid refinement (k-means family).
    #[default]
    CentroidPartition,
    /// Bottom-up merging to exactly k clusters (agglomerative).
    HierarchicalMerge,
}

impl Strategy {
    /// Cluster `embeddings` into at most `k` groups.
    ///
    /// # Errors
    ///
    /// [`Error::Clustering`] on degenerate input (empty matrix,
    /// inconsistent dimensions, `k` of 0 or exceeding the row count —
    /// the count resolver prevents the latter two, but they are checked
    /// here regardless).
    pub fn cluster(
        &self,
        embeddings: &[Vec<f32>],
        k: usize,
        search: &dyn NeighborSearch,
    ) -> Result<Partition> {
        match self {
            Self::CentroidPartition => {
                let fit = Kmeans::new(k).fit(embeddings, search)?;
                Ok(Partition {
                    labels: fit.labels,
                    centroids: fit.centroids,
                })
            }
            Self::HierarchicalMerge => {
                let labels = Agglomerative::new(k).fit_predict(embeddings)?;
                let centroids = mean_centroids(embeddings, &labels)?;
                Ok(Partition { labels, centroids })
            }
        }
    }

    /// The representative-search scope this strategy uses.
    #[must_use]
    pub fn search_scope(&self) -> SearchScope {
        match self {
            Self::CentroidPartition => SearchScope::Global,
            Self::HierarchicalMerge => SearchScope::WithinCluster,
        }
    }
}

/// Arithmetic mean of each cluster's member embeddings, indexed by label.
fn mean_centroids(embeddings: &[Vec<f32>], labels: &[usize]) -> Result<Vec<Vec<f32>>> {
    let num_clusters = labels
        .iter()
        .copied()
        .max()
        .map_or(0, |max_label| max_label + 1);
    if num_clusters == 0 {
        return Err(Error::Clustering("no cluster labels".into()));
    }

    let dim = embeddings[0].len();
    let mut sums = vec![vec![0.0f32; dim]; num_clusters];
    let mut counts = vec![0usize; num_clusters];

    for (row, &label) in embeddings.iter().zip(labels) {
        counts[label] += 1;
        for (s, v) in sums[label].iter_mut().zip(row) {
            *s += *v;
        }
    }

    Ok(sums
        .into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            let inv = 1.0 / count.max(1) as f32;
            sum.into_iter().map(|s| s * inv).collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExhaustiveSearch;

    fn blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.2],
            vec![10.0, 10.0],
            vec![10.2, 10.2],
        ]
    }

    #[test]
    fn test_both_strategies_produce_valid_partitions() {
        for strategy in [Strategy::CentroidPartition, Strategy::HierarchicalMerge] {
            let partition = strategy.cluster(&blobs(), 2, &ExhaustiveSearch).unwrap();

            assert_eq!(partition.labels.len(), 4);
            assert_eq!(partition.centroids.len(), 2);
            assert!(partition
                .labels
                .iter()
                .all(|&l| l < partition.centroids.len()));
        }
    }

    #[test]
    fn test_hierarchical_centroids_are_member_means() {
        let partition = Strategy::HierarchicalMerge
            .cluster(&blobs(), 2, &ExhaustiveSearch)
            .unwrap();

        // Cluster 0 holds the origin blob; its mean is (0.1, 0.1).
        assert!((partition.centroids[0][0] - 0.1).abs() < 1e-6);
        assert!((partition.centroids[0][1] - 0.1).abs() < 1e-6);
        assert!((partition.centroids[1][0] - 10.1).abs() < 1e-5);
    }

    #[test]
    fn test_scopes() {
        assert_eq!(
            Strategy::CentroidPartition.search_scope(),
            SearchScope::Global
        );
        assert_eq!(
            Strategy::HierarchicalMerge.search_scope(),
            SearchScope::WithinCluster
        );
    }
}
