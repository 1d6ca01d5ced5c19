use crate::zones::ZoneRegistry;
use serde::Serialize;
use std::collections::HashMap;

/// Items that share one category, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<String>,
}

impl CategoryGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: Vec::new(),
        }
    }
}

/// One input pair whose category has no zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownCategory {
    pub category: String,
    pub item: String,
}

/// Categorizer output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Categorized {
    /// groups with a zone, sorted by visit order (ties: registry order)
    pub matched: Vec<CategoryGroup>,
    /// groups without a zone, in first-appearance order
    pub unmatched: Vec<CategoryGroup>,
    /// one record per unknown-category occurrence
    pub warnings: Vec<UnknownCategory>,
}

impl Categorized {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.unmatched.is_empty()
    }

    /// Total number of items across matched and unmatched groups
    pub fn item_count(&self) -> usize {
        self.matched
            .iter()
            .chain(&self.unmatched)
            .map(|g| g.items.len())
            .sum()
    }
}

/// Groups `(item, category)` pairs by category and orders them by zone visit order.
///
/// Categories missing from `registry` are logged once per occurrence and
/// diverted to [`Categorized::unmatched`]; they never reach the route.
pub fn categorize<I, S>(pairs: I, registry: &ZoneRegistry) -> Categorized
where
    I: IntoIterator<Item = (S, S)>,
    S: Into<String>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut warnings = Vec::new();

    for (item, category) in pairs {
        let item: String = item.into();
        let category: String = category.into();

        if !registry.contains(&category) {
            log::warn!("category '{}' has no zone (item '{}')", category, item);
            warnings.push(UnknownCategory {
                category: category.clone(),
                item: item.clone(),
            });
        }

        let slot = match slots.get(&category) {
            Some(&i) => i,
            None => {
                groups.push(CategoryGroup::new(category.clone()));
                slots.insert(category, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].items.push(item);
    }

    let mut ranked = Vec::new();
    let mut unmatched = Vec::new();
    for group in groups {
        match registry.lookup(&group.category) {
            Some((position, zone)) => ranked.push(((zone.order, position), group)),
            None => unmatched.push(group),
        }
    }
    ranked.sort_by_key(|(key, _)| *key);

    let matched: Vec<CategoryGroup> = ranked.into_iter().map(|(_, g)| g).collect();
    log::debug!(
        "categorized {} matched and {} unmatched groups",
        matched.len(),
        unmatched.len()
    );

    Categorized {
        matched,
        unmatched,
        warnings,
    }
}
