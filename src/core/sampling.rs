use crate::utils::error::Result;
use crate::utils::validation::validate_sample_size;
use rand::Rng;

/// Draws `amount` distinct indices uniformly from `0..record_count`,
/// returned in ascending order.
pub fn draw_indices<R: Rng + ?Sized>(
    rng: &mut R,
    record_count: usize,
    amount: usize,
) -> Result<Vec<usize>> {
    validate_sample_size(amount, record_count)?;

    let mut indices = rand::seq::index::sample(rng, record_count, amount).into_vec();
    indices.sort_unstable();
    Ok(indices)
}
