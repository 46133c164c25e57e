use std::collections::HashSet;

use crate::catalog::{BaseWeapon, Catalog};
use crate::fragments::{substitute, IndexSource};
use crate::{GeneratorError, Result};

/// A fully sampled weapon with every fragment resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWeapon {
    pub weapon: BaseWeapon,
    /// Perk lines in draw order. Order carries no meaning.
    pub perks: Vec<String>,
}

/// Draws one weapon and `perk_count` distinct perks from the catalog.
///
/// Requests for more perks than the catalog holds are clamped to all of
/// them. Each field and each perk is substituted independently, so the
/// same fragment key may resolve differently across a single weapon.
pub fn sample<S: IndexSource + ?Sized>(
    catalog: &Catalog,
    perk_count: usize,
    rng: &mut S,
) -> Result<GeneratedWeapon> {
    if catalog.weapons.is_empty() {
        return Err(GeneratorError::EmptyCatalog);
    }
    let base = &catalog.weapons[rng.next_index(catalog.weapons.len())];

    let available = catalog.perks.len();
    let perk_count = if perk_count > available {
        tracing::info!(
            "{} perks requested, but only {} perks exist. Providing {} perks.",
            perk_count,
            available,
            available
        );
        available
    } else {
        perk_count
    };

    let drawn = draw_distinct(available, perk_count, rng);

    let randoms = &catalog.randoms;
    let weapon = BaseWeapon {
        name: substitute(&base.name, randoms, rng)?,
        hit: substitute(&base.hit, randoms, rng)?,
        damage: substitute(&base.damage, randoms, rng)?,
        range: substitute(&base.range, randoms, rng)?,
        description: substitute(&base.description, randoms, rng)?,
    };

    let perks = drawn
        .into_iter()
        .map(|idx| substitute(&catalog.perks[idx], randoms, rng))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Generated {} with {} perks", weapon.name, perks.len());

    Ok(GeneratedWeapon { weapon, perks })
}

/// Calls [`sample`] `count` times against the same random source.
pub fn sample_many<S: IndexSource + ?Sized>(
    catalog: &Catalog,
    perk_count: usize,
    count: usize,
    rng: &mut S,
) -> Result<Vec<GeneratedWeapon>> {
    (0..count).map(|_| sample(catalog, perk_count, rng)).collect()
}

/// Returns `count` distinct indices from `0..len` in draw order.
///
/// Small draws use rejection sampling against the set of indices already
/// taken. Once the draw covers more than half the range, retries get
/// expensive, so a partial Fisher-Yates shuffle is used instead. Both
/// produce a uniformly random subset. `count` is capped at `len`.
pub fn draw_distinct<S: IndexSource + ?Sized>(len: usize, count: usize, rng: &mut S) -> Vec<usize> {
    let count = count.min(len);

    if count.saturating_mul(2) <= len {
        let mut taken = HashSet::with_capacity(count);
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            let idx = rng.next_index(len);
            if taken.insert(idx) {
                drawn.push(idx);
            }
        }
        drawn
    } else {
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..count {
            let j = i + rng.next_index(len - i);
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}
