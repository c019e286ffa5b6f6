//! File content comparison
//!
//! Normalization of file text and the letter-pair similarity metric, wrapped
//! together as file comparers for the classifier.

pub mod comparer;
pub mod normalize;
pub mod similarity;

pub use comparer::{ComparerFactory, FileComparer, NormalizedTextComparer, NormalizedTextFactory};
pub use normalize::{Dialect, Normalizer, NormalizerConfig};
pub use similarity::letter_pair_similarity;
