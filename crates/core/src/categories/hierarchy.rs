//! Tree construction and parent eligibility over the flat category list.

use std::collections::{HashMap, HashSet};

use super::{Category, CategoryNode};

/// Builds the category forest from a flat list.
///
/// The parent index is built once per call and the forest is assembled
/// recursively from it; the result is rebuilt on every render pass and never
/// persisted. Sibling order follows input order, and every input category
/// appears exactly once: a category whose parent id does not resolve within
/// the list degrades to a root entry instead of being dropped.
pub fn build_tree(categories: &[Category]) -> Vec<CategoryNode> {
    let ids: HashSet<i64> = categories.iter().map(|c| c.id).collect();

    let mut children_index: HashMap<Option<i64>, Vec<&Category>> = HashMap::new();
    for category in categories {
        let key = category.parent_id.filter(|id| ids.contains(id));
        children_index.entry(key).or_default().push(category);
    }

    attach_children(&children_index, None)
}

fn attach_children(
    children_index: &HashMap<Option<i64>, Vec<&Category>>,
    parent_id: Option<i64>,
) -> Vec<CategoryNode> {
    let Some(children) = children_index.get(&parent_id) else {
        return Vec::new();
    };

    children
        .iter()
        .map(|category| CategoryNode {
            category: (*category).clone(),
            children: attach_children(children_index, Some(category.id)),
        })
        .collect()
}

/// Categories allowed as the parent of an entry at `target_level`: only those
/// on a strictly lower level qualify. Level 0 entries can have no parent, so
/// the result is empty. Ineligible categories are merely excluded here; they
/// are never removed from the list itself.
pub fn eligible_parents(categories: &[Category], target_level: i32) -> Vec<&Category> {
    if target_level == 0 {
        return Vec::new();
    }
    categories
        .iter()
        .filter(|category| category.level < target_level)
        .collect()
}
