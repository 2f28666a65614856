use rand::seq::index;
use rand::Rng;

/// Upper bound of general messages returned by one selection
pub const MAX_GENERAL_SAMPLES: usize = 5;

/// Uniform sample without replacement of `min(amount, items.len())` items.
///
/// The result is in draw order, not in input order.
pub fn sample_without_replacement<T, R>(rng: &mut R, items: Vec<T>, amount: usize) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let amount = amount.min(items.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    index::sample(rng, slots.len(), amount)
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

/// Sample general message keys with the thread-local generator.
///
/// Kept synchronous so the generator is never held across an await point.
pub fn sample_general<T>(items: Vec<T>) -> Vec<T> {
    sample_without_replacement(&mut rand::thread_rng(), items, MAX_GENERAL_SAMPLES)
}
