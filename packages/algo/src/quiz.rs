//! Quiz Sampling
//!
//! Draws a bounded, unordered random subset of the available questions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Question;

/// Samples up to `size` distinct questions without replacement.
///
/// When fewer than `size` are available all of them are returned, in random
/// order.
pub fn sample_questions<R: Rng + ?Sized>(
    available: &[Question],
    size: usize,
    rng: &mut R,
) -> Vec<Question> {
    let amount = size.min(available.len());
    available.choose_multiple(rng, amount).cloned().collect()
}
