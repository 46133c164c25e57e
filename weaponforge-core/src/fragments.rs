//! Randomised fragment substitution.
//!
//! A fragment is a literal key such as `{ELEMENT}` mapped to a list of
//! options. Every occurrence of a key is replaced by an independently
//! chosen option, and options may reintroduce keys (including their own),
//! which is how catalogs express nested randomisation.

use rand::Rng;
use std::collections::BTreeMap;

use crate::{GeneratorError, Result};

/// Upper bound on replacements performed for a single string.
pub const MAX_REPLACEMENTS: usize = 10_000;

/// Source of uniform indices shared by the sampler and the substitutor.
pub trait IndexSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replaces every fragment key in `text` until none remain.
///
/// Keys are visited in map order, one occurrence at a time. Passes repeat
/// until a full pass changes nothing, so a key introduced by a later key's
/// option is resolved as well.
pub fn substitute<S: IndexSource + ?Sized>(
    text: &str,
    randoms: &BTreeMap<String, Vec<String>>,
    rng: &mut S,
) -> Result<String> {
    let mut out = text.to_string();
    let mut replacements = 0usize;

    loop {
        let mut changed = false;

        for (key, options) in randoms {
            if key.is_empty() {
                continue;
            }
            while let Some(pos) = out.find(key.as_str()) {
                if options.is_empty() {
                    return Err(GeneratorError::EmptyFragment { key: key.clone() });
                }
                if replacements >= MAX_REPLACEMENTS {
                    return Err(GeneratorError::FragmentRecursion { key: key.clone() });
                }

                let choice = &options[rng.next_index(options.len())];
                out.replace_range(pos..pos + key.len(), choice);
                replacements += 1;
                changed = true;
            }
        }

        if !changed {
            return Ok(out);
        }
    }
}
