use crate::{
    io::color::ColorValue,
    io::error::{GenerationError, Result, invalid_parameter},
    math::random::RandomSource,
    spatial::{ColorAssignment, HexCell, HexGrid},
};

/// Grow a connected blob of `color` outward from `seed`
///
/// Each growth step extends from a uniformly random member of the cluster
/// rather than the newest one, which keeps the blobs irregular. Growth stops
/// at `target_size` members or as soon as the chosen member has no unclaimed
/// neighbor, so the cluster may come out smaller than requested.
///
/// Returns the cluster members in placement order, seed first.
///
/// # Errors
///
/// Returns an error if:
/// - `seed` already has a color ([`GenerationError::InvalidSeed`])
/// - `target_size` is zero ([`GenerationError::InvalidParameter`])
pub fn plant<'g, R: RandomSource + ?Sized>(
    seed: &'g HexCell,
    color: ColorValue,
    target_size: usize,
    grid: &'g HexGrid,
    assignment: &mut ColorAssignment,
    rng: &mut R,
) -> Result<Vec<&'g HexCell>> {
    if target_size == 0 {
        return Err(invalid_parameter(
            "target_size",
            &target_size,
            &"clusters need at least one cell",
        ));
    }
    if assignment.is_claimed(seed) {
        return Err(GenerationError::InvalidSeed {
            key: seed.key.clone(),
        });
    }

    assignment.assign(seed, color)?;
    let mut members = Vec::with_capacity(target_size);
    members.push(seed);

    while members.len() < target_size {
        let Some(&anchor) = members.get(rng.index(members.len())) else {
            break;
        };

        let open: Vec<&HexCell> = grid
            .neighbors(anchor)
            .into_iter()
            .filter(|neighbor| !assignment.is_claimed(neighbor))
            .collect();

        if open.is_empty() {
            break;
        }
        let Some(&next) = open.get(rng.index(open.len())) else {
            break;
        };

        assignment.assign(next, color)?;
        members.push(next);
    }

    Ok(members)
}
