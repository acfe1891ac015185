use crate::{num::approx_eq, DuplicatePolicy, EngineConfig, NonFinitePolicy};

use super::{BuildError, Sample};

// -----------------------------------------------------------------------------
// normalize
// -----------------------------------------------------------------------------
/// Sorts raw samples by x and resolves x-duplicates according to `config`.
///
/// The returned samples are finite and strictly increasing in x.
pub(super) fn normalize(
    samples: impl IntoIterator<Item = Sample>,
    config: &EngineConfig,
) -> Result<Vec<Sample>, BuildError> {
    let mut indexed = Vec::new();
    let mut dropped = 0usize;
    for (index, sample) in samples.into_iter().enumerate() {
        if sample.is_finite() {
            indexed.push((index, sample));
            continue;
        }
        match config.non_finite {
            NonFinitePolicy::Reject => {
                return Err(BuildError::NonFinite {
                    index,
                    x: sample.x,
                    y: sample.y,
                });
            }
            NonFinitePolicy::Drop => {
                log::warn!(
                    "Dropping non-finite sample #{}: ({}, {})",
                    index,
                    sample.x,
                    sample.y
                );
                dropped += 1;
            }
        }
    }
    if indexed.is_empty() {
        return Err(BuildError::Empty);
    }

    // stable, so equal x keep their input order
    indexed.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));

    let eps_x = config.tolerance.eps_x();
    let mut resolved = Vec::with_capacity(indexed.len());
    let mut rest = indexed.as_slice();
    while let Some(((_, anchor), tail)) = rest.split_first() {
        let size = 1 + tail
            .iter()
            .take_while(|(_, s)| approx_eq(s.x, anchor.x, eps_x))
            .count();
        let (cluster, tail) = rest.split_at(size);
        resolved.push(resolve_cluster(cluster, config.duplicates));
        rest = tail;
    }

    log::debug!(
        "Normalized {} samples into {} (dropped: {}, merged: {})",
        indexed.len() + dropped,
        resolved.len(),
        dropped,
        indexed.len() - resolved.len()
    );
    Ok(resolved)
}

/// `cluster` is non-empty and sorted by x.
///
/// The resolved sample always sits at the anchor x, so consecutive clusters stay
/// at least `eps_x` apart.
fn resolve_cluster(cluster: &[(usize, Sample)], policy: DuplicatePolicy) -> Sample {
    let anchor = cluster[0].1;
    let y = match policy {
        _ if cluster.len() == 1 => anchor.y,
        DuplicatePolicy::FirstWins => cluster
            .iter()
            .min_by_key(|(index, _)| *index)
            .map_or(anchor.y, |(_, s)| s.y),
        DuplicatePolicy::LastWins => cluster
            .iter()
            .max_by_key(|(index, _)| *index)
            .map_or(anchor.y, |(_, s)| s.y),
        DuplicatePolicy::Average => {
            let n = cluster.len() as f64;
            cluster.iter().map(|(_, s)| s.y / n).sum()
        }
    };
    Sample::new(anchor.x, y)
}
