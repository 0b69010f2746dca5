//! Agglomerative clustering: bottom-up merging to exactly k clusters.
//!
//! # The Algorithm
//!
//! Every point starts as its own cluster. Repeatedly merge the two
//! closest clusters until k remain:
//!
//! ```text
//! Step 0:  {0} {1} {2} {3} {4}
//! Step 1:  {0,1} {2} {3} {4}      <- 0 and 1 were closest
//! Step 2:  {0,1} {2} {3,4}
//! Step 3:  {0,1,2} {3,4}          <- stop at k = 2
//! ```
//!
//! ## Linkage
//!
//! Merging needs a notion of distance *between clusters*, not just
//! points. This implementation uses Ward's criterion over Euclidean
//! distance — merge the pair whose union increases within-cluster
//! variance the least — maintained incrementally with the
//! Lance–Williams recurrence:
//!
//! ```text
//! D(i∪j, h) = ((nᵢ+nₕ)·D(i,h) + (nⱼ+nₕ)·D(j,h) − nₕ·D(i,j)) / (nᵢ+nⱼ+nₕ)
//! ```
//!
//! Ward tends to produce compact, similarly-sized clusters, which suits
//! embedding spaces where cluster shape is roughly isotropic.
//!
//! ## Complexity
//!
//! O(n²) memory for the distance matrix, O(n³) worst-case time from the
//! naive minimum scan per merge. Document chunk counts are hundreds, not
//! millions; simplicity wins here.
//!
//! ## Determinism
//!
//! No randomness anywhere: equal-distance merges resolve toward the
//! lowest cluster pair, so the dendrogram — and the labels cut from it —
//! are stable across runs.

use crate::index::squared_euclidean;
use crate::{Error, Result};

/// Agglomerative clusterer producing exactly k clusters.
///
/// ## Example
///
/// ```rust
/// use pith::Agglomerative;
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.1, 0.1],
///     vec![10.0, 10.0],
///     vec![10.1, 10.1],
/// ];
///
/// let labels = Agglomerative::new(2).fit_predict(&data).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
#[derive(Debug, Clone)]
pub struct Agglomerative {
    k: usize,
}

impl Agglomerative {
    /// Create an agglomerative clusterer for `k` clusters.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Fit on dense vectors and return one cluster label per point.
    ///
    /// Labels are contiguous in `0..k`, numbered in ascending order of
    /// each cluster's smallest member index.
    ///
    /// # Errors
    ///
    /// [`Error::Clustering`] on degenerate input: empty data, zero or
    /// oversized `k`, or inconsistent dimensionality.
    pub fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let n = data.len();
        if n == 0 {
            return Err(Error::Clustering("empty input".into()));
        }
        if self.k == 0 {
            return Err(Error::Clustering("k must be at least 1".into()));
        }
        if self.k > n {
            return Err(Error::Clustering(format!(
                "requested {} clusters for {n} points",
                self.k
            )));
        }
        let dim = data[0].len();
        for row in data.iter().skip(1) {
            if row.len() != dim {
                return Err(Error::Clustering(format!(
                    "dimension mismatch: expected {dim}, found {}",
                    row.len()
                )));
            }
        }

        // Pairwise squared distances; slot i holds the cluster whose
        // smallest member is point i.
        let mut dist = vec![vec![0.0f32; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = squared_euclidean(&data[i], &data[j]);
                dist[i][j] = d;
                dist[j][i] = d;
            }
        }

        let mut active = vec![true; n];
        let mut sizes = vec![1usize; n];
        let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();

        for _ in 0..(n - self.k) {
            // Closest active pair; strict < keeps ties on the lowest pair.
            let mut best = (usize::MAX, usize::MAX);
            let mut best_d = f32::INFINITY;
            for i in 0..n {
                if !active[i] {
                    continue;
                }
                for j in (i + 1)..n {
                    if active[j] && dist[i][j] < best_d {
                        best_d = dist[i][j];
                        best = (i, j);
                    }
                }
            }

            let (i, j) = best;

            // Lance-Williams update for Ward's criterion.
            let (si, sj) = (sizes[i] as f32, sizes[j] as f32);
            for h in 0..n {
                if h == i || h == j || !active[h] {
                    continue;
                }
                let sh = sizes[h] as f32;
                let d = ((si + sh) * dist[i][h] + (sj + sh) * dist[j][h] - sh * dist[i][j])
                    / (si + sj + sh);
                dist[i][h] = d;
                dist[h][i] = d;
            }

            active[j] = false;
            sizes[i] += sizes[j];
            let absorbed = std::mem::take(&mut members[j]);
            members[i].extend(absorbed);
        }

        // Lower slots always absorb higher ones, so slot order is
        // ascending smallest-member order.
        let mut labels = vec![0usize; n];
        let mut next_label = 0usize;
        for slot in 0..n {
            if !active[slot] {
                continue;
            }
            for &point in &members[slot] {
                labels[point] = next_label;
            }
            next_label += 1;
        }

        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 9.9],
            vec![0.1, 0.2],
        ]
    }

    #[test]
    fn test_merges_blobs() {
        let labels = Agglomerative::new(2).fit_predict(&blobs()).unwrap();

        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[0], labels[4]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_labels_ascend_by_first_member() {
        let labels = Agglomerative::new(2).fit_predict(&blobs()).unwrap();

        // Point 0's cluster appears first.
        assert_eq!(labels[0], 0);
        assert_eq!(labels[2], 1);
    }

    #[test]
    fn test_k_equals_n_is_identity() {
        let labels = Agglomerative::new(5).fit_predict(&blobs()).unwrap();
        assert_eq!(labels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_point() {
        let labels = Agglomerative::new(1)
            .fit_predict(&[vec![1.0, 2.0]])
            .unwrap();
        assert_eq!(labels, vec![0]);
    }

    #[test]
    fn test_deterministic() {
        let a = Agglomerative::new(3).fit_predict(&blobs()).unwrap();
        let b = Agglomerative::new(3).fit_predict(&blobs()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Agglomerative::new(1).fit_predict(&[]),
            Err(Error::Clustering(_))
        ));
    }

    #[test]
    fn test_k_larger_than_n_rejected() {
        assert!(matches!(
            Agglomerative::new(9).fit_predict(&blobs()),
            Err(Error::Clustering(_))
        ));
    }
}
