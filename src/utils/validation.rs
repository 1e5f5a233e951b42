use crate::domain::model::{ItemId, MAX_RESULTS_CEILING};

/// Boundary normalization helpers. Invalid values are repaired silently, never
/// reported: the selector's contract is "degrade, don't fail".

/// Clamp a requested result count into the supported range [1, 10].
pub fn clamp_slot_count(requested: usize) -> usize {
    requested.clamp(1, MAX_RESULTS_CEILING)
}

/// Drop non-positive ids, preserving the caller's order for the survivors.
pub fn sanitize_ids(ids: &[ItemId]) -> Vec<ItemId> {
    ids.iter().copied().filter(|id| *id >= 1).collect()
}

/// Drop empty and whitespace-only term slugs.
pub fn sanitize_slugs<I>(slugs: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    slugs
        .into_iter()
        .filter(|slug| !slug.trim().is_empty())
        .collect()
}
