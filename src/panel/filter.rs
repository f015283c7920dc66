use crate::domain::models::StorageSystem;

/// Systems whose name contains `term`, ignoring case, in input order.
///
/// An empty term returns every system. Nothing is cached; callers re-run this
/// on each render so a replaced input list is picked up immediately.
#[must_use]
pub fn filter_systems<'s>(systems: &'s [StorageSystem], term: &str) -> Vec<&'s StorageSystem> {
    if term.is_empty() {
        return systems.iter().collect();
    }
    let needle = term.to_lowercase();
    systems
        .iter()
        .filter(|system| system.name.to_lowercase().contains(&needle))
        .collect()
}
