//! Exact nearest-neighbor search backends.
//!
//! Both clustering strategies and the representative selector need one
//! primitive: for a batch of query vectors, the index of the nearest
//! data vector under Euclidean distance. Two backends provide it behind
//! one trait, so the choice is made once at construction instead of
//! branching on a flag at every call site.
//!
//! ## Backends
//!
//! ### Exhaustive Scan
//!
//! Per query, a straight linear scan over the data rows. No setup cost,
//! minimal memory. Fine for small-to-medium corpora.
//!
//! ### Flat Index
//!
//! Lays the data out in one contiguous buffer with precomputed squared
//! norms, then answers queries with the expansion
//!
//! ```text
//! ‖q − x‖² = ‖q‖² − 2·q·x + ‖x‖²
//! ```
//!
//! so the per-candidate work is a single dot product against
//! cache-friendly memory. Still exact — the same layout a flat L2
//! vector index uses — just built for batched queries over larger
//! corpora.
//!
//! Both backends break distance ties toward the lowest index, so they
//! are interchangeable on well-separated data. Near-exact ties can
//! resolve differently between them (the expansion rounds differently
//! than the direct subtraction); callers should not depend on tie
//! behavior across backends.

/// Batched exact nearest-neighbor search.
pub trait NeighborSearch: Send + Sync {
    /// For each query, the index of the nearest vector in `data`.
    ///
    /// Distances are Euclidean; ties break toward the lowest data index.
    /// `data` must be non-empty and dimensions must agree.
    fn nearest(&self, data: &[Vec<f32>], queries: &[Vec<f32>]) -> Vec<usize>;
}

/// Per-query linear scan backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl NeighborSearch for ExhaustiveSearch {
    fn nearest(&self, data: &[Vec<f32>], queries: &[Vec<f32>]) -> Vec<usize> {
        debug_assert!(!data.is_empty());

        queries
            .iter()
            .map(|q| {
                let mut best = 0usize;
                let mut best_d2 = f32::INFINITY;
                for (i, row) in data.iter().enumerate() {
                    let d2 = squared_euclidean(q, row);
                    if d2 < best_d2 {
                        best_d2 = d2;
                        best = i;
                    }
                }
                best
            })
            .collect()
    }
}

/// Contiguous flat-layout backend with precomputed norms.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatIndex;

impl NeighborSearch for FlatIndex {
    fn nearest(&self, data: &[Vec<f32>], queries: &[Vec<f32>]) -> Vec<usize> {
        debug_assert!(!data.is_empty());

        let n = data.len();
        let dim = data[0].len();

        // Build once per call: SoA buffer plus squared norms.
        let mut flat: Vec<f32> = Vec::with_capacity(n * dim);
        for row in data {
            debug_assert_eq!(row.len(), dim);
            flat.extend_from_slice(row);
        }
        let norms: Vec<f32> = data.iter().map(|row| dot(row, row)).collect();

        queries
            .iter()
            .map(|q| {
                let q_norm = dot(q, q);
                let mut best = 0usize;
                let mut best_score = f32::INFINITY;
                for i in 0..n {
                    let row = &flat[i * dim..(i + 1) * dim];
                    let score = q_norm - 2.0 * dot(q, row) + norms[i];
                    if score < best_score {
                        best_score = score;
                        best = i;
                    }
                }
                best
            })
            .collect()
    }
}

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[inline]
pub(crate) fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
