use std::cmp::Ordering;

use promptloom_taxonomy::Taxonomy;

use crate::candidate::EnhancementCandidate;

/// Greedy single-pass selection: walk candidates by adjusted weight
/// descending (stable for ties), accept any candidate that conflicts with no
/// already-accepted one, stop once `max` are accepted.
///
/// A rejected candidate does not end the scan. No backtracking; conflicts are
/// rare and the table is small, so the greedy approximation is acceptable.
pub(crate) fn resolve_conflicts(
    taxonomy: &Taxonomy,
    candidates: &[EnhancementCandidate],
    max: usize,
) -> Vec<EnhancementCandidate> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .weight
            .partial_cmp(&candidates[a].weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut selected: Vec<EnhancementCandidate> = Vec::new();
    for idx in order {
        if selected.len() == max {
            break;
        }
        let candidate = &candidates[idx];
        let conflicts = selected
            .iter()
            .any(|accepted| taxonomy.is_conflicting(&candidate.name, &accepted.name));
        if conflicts {
            log::debug!(
                "rejecting '{}' ({}): conflicts with an accepted candidate",
                candidate.name,
                candidate.category
            );
            continue;
        }
        selected.push(candidate.clone());
    }
    selected
}
