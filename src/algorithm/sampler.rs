use crate::{
    io::color::ColorValue,
    io::error::{GenerationError, Result},
    io::palette::PaletteEntry,
    math::random::RandomSource,
};

/// Pick a color with probability proportional to its entry weight
///
/// Walks the entries in order, accumulating weight, and returns the first
/// entry whose cumulative weight reaches a draw from `[0, total)`. Entries
/// without positive weight are never returned.
///
/// # Errors
///
/// Returns an error if:
/// - `entries` is empty ([`GenerationError::EmptyPalette`])
/// - The weights sum to zero, a negative value or a non-finite value
///   ([`GenerationError::NonPositiveWeight`])
pub fn select<R: RandomSource + ?Sized>(
    entries: &[PaletteEntry],
    rng: &mut R,
) -> Result<ColorValue> {
    if entries.is_empty() {
        return Err(GenerationError::EmptyPalette);
    }

    let total: f64 = entries.iter().map(|entry| entry.weight).sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(GenerationError::NonPositiveWeight { total });
    }

    let draw = rng.next_unit() * total;
    let mut cumulative = 0.0;
    let mut fallback = None;
    for entry in entries.iter().filter(|entry| entry.weight > 0.0) {
        cumulative += entry.weight;
        if cumulative >= draw {
            return Ok(entry.color);
        }
        fallback = Some(entry.color);
    }

    // Rounding can leave the running sum a hair below the draw
    fallback.ok_or(GenerationError::NonPositiveWeight { total })
}
