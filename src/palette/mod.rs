//! Palette extraction: pixel sampling and k-means clustering
//!
//! The sampler turns a decoded RGBA buffer into an ordered sample
//! sequence; the clusterer reduces that sequence to a fixed number of
//! representative colors.

pub mod kmeans;
pub mod sampler;

pub use kmeans::KMeans;
pub use sampler::sample_rgba;
