//! Dependency-aware deletion ordering.
//!
//! The controller refuses to delete a parent while anything still
//! references it, so a flat listing has to be turned into ordered groups:
//!
//! - pools: sub-pools, then global pools;
//! - sites: floors, then buildings, then areas with every area placed
//!   after all of its descendant areas.
//!
//! Everything here is pure; no I/O happens in this module.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::model::{DeletionGroup, DeletionPlan, Family, Resource, ResourceKind};

/// Build the deletion plan for one family.
///
/// Resources of the other family are ignored. Site resources without a
/// hierarchy path are dropped, then duplicates are collapsed by id (first
/// occurrence wins).
pub fn plan(collection: &[Resource], family: Family) -> DeletionPlan {
    let members = collection
        .iter()
        .filter(|r| r.kind.family() == family)
        .filter(|r| {
            let keep = family == Family::Pools || r.path().is_some();
            if !keep {
                trace!(id = %r.id, "skipping site without hierarchy path");
            }
            keep
        });
    let unique = dedup_by_id(members);

    let groups = match family {
        Family::Pools => {
            let (sub_pools, pools): (Vec<_>, Vec<_>) = unique
                .into_iter()
                .partition(|r| r.kind == ResourceKind::SubPool);
            vec![
                DeletionGroup::new(ResourceKind::SubPool, sub_pools),
                DeletionGroup::new(ResourceKind::Pool, pools),
            ]
        }
        Family::Sites => {
            let mut floors = Vec::new();
            let mut buildings = Vec::new();
            let mut areas = Vec::new();
            for r in unique {
                match r.kind {
                    ResourceKind::Floor => floors.push(r),
                    ResourceKind::Building => buildings.push(r),
                    ResourceKind::Area => areas.push(r),
                    ResourceKind::Pool | ResourceKind::SubPool => {}
                }
            }

            vec![
                DeletionGroup::new(ResourceKind::Floor, floors),
                DeletionGroup::new(ResourceKind::Building, buildings),
                DeletionGroup::new(ResourceKind::Area, order_areas(areas)),
            ]
        }
    };

    DeletionPlan { family, groups }
}

fn dedup_by_id<'a>(resources: impl Iterator<Item = &'a Resource>) -> Vec<Resource> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for r in resources {
        if seen.insert(&r.id) {
            unique.push(r.clone());
        }
    }
    unique
}

/// Path split into non-empty, trimmed segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Order areas children-before-parent.
///
/// Builds a parent-pointer forest where each area's parent is its nearest
/// ancestor *area* by path segments (intermediate non-area segments are
/// skipped), then emits a post-order traversal. Siblings are visited in
/// path order so the result is deterministic.
fn order_areas(areas: Vec<Resource>) -> Vec<Resource> {
    let mut keyed: Vec<(Vec<String>, Resource)> = areas
        .into_iter()
        .map(|r| {
            let key = segments(r.path().unwrap_or_default())
                .into_iter()
                .map(String::from)
                .collect();
            (key, r)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut index_by_path: HashMap<String, usize> = HashMap::new();
    for (i, (key, _)) in keyed.iter().enumerate() {
        index_by_path.entry(key.join("/")).or_insert(i);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); keyed.len()];
    let mut roots = Vec::new();
    for (i, (key, _)) in keyed.iter().enumerate() {
        let parent = (1..key.len())
            .rev()
            .find_map(|depth| index_by_path.get(&key[..depth].join("/")).copied());
        match parent {
            Some(p) => children[p].push(i),
            None => roots.push(i),
        }
    }

    let mut order = Vec::with_capacity(keyed.len());
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        stack.push((node, true));
        stack.extend(children[node].iter().rev().map(|&c| (c, false)));
    }

    let mut slots: Vec<Option<Resource>> = keyed.into_iter().map(|(_, r)| Some(r)).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
