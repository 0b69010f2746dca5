//! K-means centroid partitioning.
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat.
//!
//! **Objective**: minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ‖x − μ_k‖²
//! ```
//!
//! ## Determinism
//!
//! Seeding is k-means++ driven by a fixed-seed RNG, so two runs over the
//! same data produce the same partition. Reproducibility matters more
//! here than squeezing out the last bit of objective: the selection
//! pipeline promises identical output for identical input.
//!
//! ## Empty Clusters
//!
//! Lloyd iterations can strand a centroid with no members. Stranded
//! centroids are re-seeded to the point currently farthest from its own
//! centroid, which keeps all k centroids live on non-degenerate input.
//!
//! Assignment runs through the injected [`NeighborSearch`] backend, so
//! the same code serves the plain scan and the flat-index paths.

use rand::prelude::*;

use crate::index::squared_euclidean;
use crate::{Error, NeighborSearch, Result};

/// Iteration cap for Lloyd refinement.
const MAX_ITER: usize = 20;

/// Seed for reproducible centroid initialization.
const SEED: u64 = 1337;

/// K-means clusterer.
///
/// ## Example
///
/// ```rust
/// use pith::{ExhaustiveSearch, Kmeans};
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.1, 0.1],
///     vec![10.0, 10.0],
///     vec![10.1, 10.1],
/// ];
///
/// let fit = Kmeans::new(2).fit(&data, &ExhaustiveSearch).unwrap();
/// assert_eq!(fit.labels[0], fit.labels[1]);
/// assert_ne!(fit.labels[0], fit.labels[2]);
/// ```
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    seed: u64,
}

/// A fitted k-means model: one label per point, k centroids.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Cluster label per input point, each in `0..k`.
    pub labels: Vec<usize>,
    /// Final centroid per cluster.
    pub centroids: Vec<Vec<f32>>,
}

impl Kmeans {
    /// Create a k-means clusterer for `k` clusters.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: MAX_ITER,
            seed: SEED,
        }
    }

    /// Override the Lloyd iteration cap.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Override the seeding RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit on dense vectors, assigning points via `search`.
    ///
    /// # Errors
    ///
    /// [`Error::Clustering`] on degenerate input: empty data, zero or
    /// oversized `k`, or inconsistent dimensionality.
    pub fn fit(&self, data: &[Vec<f32>], search: &dyn NeighborSearch) -> Result<KmeansFit> {
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
        if dim == 0 {
            return Err(Error::Clustering("zero-dimensional vectors".into()));
        }
        for row in data.iter().skip(1) {
            if row.len() != dim {
                return Err(Error::Clustering(format!(
                    "dimension mismatch: expected {dim}, found {}",
                    row.len()
                )));
            }
        }

        let mut centroids = self.seed_centroids(data);
        let mut labels = search.nearest(&centroids, data);

        for _ in 0..self.max_iter {
            // Update: move each live centroid to the mean of its members.
            let mut sums = vec![vec![0.0f32; dim]; self.k];
            let mut counts = vec![0usize; self.k];
            for (point, &label) in data.iter().zip(&labels) {
                counts[label] += 1;
                for (s, v) in sums[label].iter_mut().zip(point) {
                    *s += *v;
                }
            }
            for (j, sum) in sums.into_iter().enumerate() {
                if counts[j] > 0 {
                    let inv = 1.0 / counts[j] as f32;
                    centroids[j] = sum.into_iter().map(|s| s * inv).collect();
                }
            }

            // Re-seed stranded centroids to the farthest point.
            let empty: Vec<usize> = (0..self.k).filter(|&j| counts[j] == 0).collect();
            if !empty.is_empty() {
                let mut dist: Vec<f32> = data
                    .iter()
                    .zip(&labels)
                    .map(|(point, &label)| squared_euclidean(point, &centroids[label]))
                    .collect();
                for j in empty {
                    let far = dist
                        .iter()
                        .enumerate()
                        .max_by(|a, b| a.1.total_cmp(b.1))
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    centroids[j] = data[far].clone();
                    dist[far] = 0.0;
                }
            }

            // Assign: nearest centroid per point, ties to the lowest label.
            let new_labels = search.nearest(&centroids, data);
            if new_labels == labels {
                break;
            }
            labels = new_labels;
        }

        Ok(KmeansFit { labels, centroids })
    }

    /// K-means++ initialization: spread the initial centroids out by
    /// sampling points proportional to squared distance from the chosen
    /// set.
    fn seed_centroids(&self, data: &[Vec<f32>]) -> Vec<Vec<f32>> {
        let n = data.len();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut centroids: Vec<Vec<f32>> = Vec::with_capacity(self.k);
        centroids.push(data[rng.random_range(0..n)].clone());

        let mut d2: Vec<f32> = data
            .iter()
            .map(|p| squared_euclidean(p, &centroids[0]))
            .collect();

        while centroids.len() < self.k {
            let total: f32 = d2.iter().sum();
            let next = if total > 0.0 {
                let target = rng.random::<f32>() * total;
                let mut cumulative = 0.0f32;
                let mut chosen = n - 1;
                for (i, &w) in d2.iter().enumerate() {
                    cumulative += w;
                    if cumulative >= target {
                        chosen = i;
                        break;
                    }
                }
                chosen
            } else {
                // All remaining mass is zero (duplicate points); any pick works.
                rng.random_range(0..n)
            };

            let centroid = data[next].clone();
            for (slot, point) in d2.iter_mut().zip(data) {
                *slot = slot.min(squared_euclidean(point, &centroid));
            }
            centroids.push(centroid);
        }

        centroids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExhaustiveSearch, FlatIndex};

    fn blobs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.2, 0.1],
            vec![0.1, 0.3],
            vec![9.8, 10.1],
            vec![10.0, 10.0],
            vec![10.2, 9.9],
        ]
    }

    #[test]
    fn test_separates_blobs() {
        let fit = Kmeans::new(2).fit(&blobs(), &ExhaustiveSearch).unwrap();

        assert_eq!(fit.labels.len(), 6);
        assert_eq!(fit.centroids.len(), 2);
        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[3], fit.labels[5]);
        assert_ne!(fit.labels[0], fit.labels[3]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = Kmeans::new(3).fit(&blobs(), &ExhaustiveSearch).unwrap();
        let b = Kmeans::new(3).fit(&blobs(), &ExhaustiveSearch).unwrap();
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_backends_agree_on_separated_data() {
        let scan = Kmeans::new(2).fit(&blobs(), &ExhaustiveSearch).unwrap();
        let flat = Kmeans::new(2).fit(&blobs(), &FlatIndex).unwrap();
        assert_eq!(scan.labels, flat.labels);
    }

    #[test]
    fn test_k_equals_one_centroid_is_mean() {
        let data = vec![vec![0.0, 0.0], vec![2.0, 4.0]];
        let fit = Kmeans::new(1).fit(&data, &ExhaustiveSearch).unwrap();

        assert_eq!(fit.labels, vec![0, 0]);
        assert!((fit.centroids[0][0] - 1.0).abs() < 1e-6);
        assert!((fit.centroids[0][1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Kmeans::new(1).fit(&[], &ExhaustiveSearch),
            Err(Error::Clustering(_))
        ));
    }

    #[test]
    fn test_k_larger_than_n_rejected() {
        let data = vec![vec![0.0], vec![1.0]];
        assert!(matches!(
            Kmeans::new(3).fit(&data, &ExhaustiveSearch),
            Err(Error::Clustering(_))
        ));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let data = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            Kmeans::new(1).fit(&data, &ExhaustiveSearch),
            Err(Error::Clustering(_))
        ));
    }
}
