//! K-means clustering of RGB samples
//!
//! Reduces a sample sequence to a fixed number of representative
//! colors. The algorithm runs a fixed number of refinement passes
//! rather than checking for convergence, so the result is
//! budget-bounded, not guaranteed optimal; this matches the behavior
//! the palette extractor has always had.
//!
//! Initialization draws centroids at random, so the random source is
//! injected: production callers use [`KMeans::cluster`], tests pin a
//! seeded [`rand::rngs::StdRng`] through [`KMeans::cluster_with`].

use crate::color::Rgb;
use crate::constants::clustering;
use crate::error::{ChromaError, Result};
use rand::Rng;

/// K-means color clusterer
///
/// Centroids live in RGB space; distance is plain Euclidean over the
/// three channels.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    /// Number of centroids produced per run
    palette_size: usize,
    /// Fixed refinement pass budget; every run executes the full count
    refinement_passes: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new()
    }
}

impl KMeans {
    /// Create a clusterer with the default parameters (6 colors, 10 passes)
    pub fn new() -> Self {
        Self {
            palette_size: clustering::DEFAULT_PALETTE_SIZE,
            refinement_passes: clustering::REFINEMENT_PASSES,
        }
    }

    /// Create a clusterer with custom parameters
    pub fn with_params(palette_size: usize, refinement_passes: usize) -> Self {
        Self {
            palette_size,
            refinement_passes,
        }
    }

    /// Cluster samples using the thread-local random source
    ///
    /// See [`KMeans::cluster_with`] for the algorithm and error cases.
    pub fn cluster(&self, samples: &[Rgb]) -> Result<Vec<Rgb>> {
        self.cluster_with(samples, &mut rand::rng())
    }

    /// Cluster samples into exactly `palette_size` representative colors
    ///
    /// Initial centroids are drawn uniformly at random (with
    /// replacement) from the samples, so fewer samples than centroids
    /// is allowed and may produce duplicate output colors. Each pass
    /// assigns every sample to its nearest centroid (first minimum wins
    /// on ties) and recomputes each centroid as the rounded
    /// component-wise mean of its assignees; a centroid that receives
    /// no samples keeps its previous value. Centroids are returned in
    /// their original index order.
    ///
    /// # Errors
    ///
    /// Returns `ChromaError::EmptySamples` for an empty sample
    /// sequence and `ChromaError::InvalidParameter` when
    /// `palette_size` or `refinement_passes` is zero.
    pub fn cluster_with<R: Rng + ?Sized>(&self, samples: &[Rgb], rng: &mut R) -> Result<Vec<Rgb>> {
        if self.palette_size == 0 {
            return Err(ChromaError::invalid_parameter("palette_size", 0));
        }
        if self.refinement_passes == 0 {
            return Err(ChromaError::invalid_parameter("refinement_passes", 0));
        }
        if samples.is_empty() {
            return Err(ChromaError::EmptySamples);
        }

        let k = self.palette_size;
        let mut centroids: Vec<Rgb> = (0..k)
            .map(|_| samples[rng.random_range(0..samples.len())])
            .collect();

        let mut sums = vec![[0u64; 3]; k];
        let mut counts = vec![0usize; k];

        for _ in 0..self.refinement_passes {
            sums.iter_mut().for_each(|s| *s = [0; 3]);
            counts.iter_mut().for_each(|c| *c = 0);

            for &sample in samples {
                let nearest = nearest_centroid(sample, &centroids);
                sums[nearest][0] += sample.r as u64;
                sums[nearest][1] += sample.g as u64;
                sums[nearest][2] += sample.b as u64;
                counts[nearest] += 1;
            }

            for (i, centroid) in centroids.iter_mut().enumerate() {
                // An empty cluster keeps its previous centroid
                if counts[i] == 0 {
                    continue;
                }
                let n = counts[i] as f64;
                *centroid = Rgb::new(
                    mean_channel(sums[i][0], n),
                    mean_channel(sums[i][1], n),
                    mean_channel(sums[i][2], n),
                );
            }
        }

        Ok(centroids)
    }
}

/// Index of the centroid closest to `sample`; scan order breaks ties
fn nearest_centroid(sample: Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (i, &centroid) in centroids.iter().enumerate() {
        let dist = distance_squared(sample, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Squared Euclidean distance in RGB space; ordering is the same as for
/// the true distance, so the square root is never taken
fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

fn mean_channel(sum: u64, n: f64) -> u8 {
    (sum as f64 / n).round() as u8
}
