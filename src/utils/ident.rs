use std::collections::HashSet;
use uuid::Uuid;

/// Produces `count` distinct opaque string identifiers.
pub fn unique_ids(count: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let id = Uuid::new_v4().to_string();
        if seen.insert(id.clone()) {
            ids.push(id);
        }
    }
    ids
}
