use crate::{
    categorize::{Categorized, categorize},
    error::Result,
    route::{Route, Segment, build_route},
    zones::ZoneRegistry,
};
use serde::Serialize;

/// Grouped list and walking route for one shopping list snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingPlan {
    pub categorized: Categorized,
    pub route: Route,
}

impl ShoppingPlan {
    pub fn segments(&self) -> Vec<Segment> {
        self.route.segments()
    }
}

/// Categorizes the pairs and builds the route through the matched zones
pub fn plan_trip<I, S>(pairs: I, registry: &ZoneRegistry) -> Result<ShoppingPlan>
where
    I: IntoIterator<Item = (S, S)>,
    S: Into<String>,
{
    let categorized = categorize(pairs, registry);
    let route = build_route(&categorized.matched, registry)?;

    log::info!(
        "planned {} stops for {} items ({} without zone)",
        route.len(),
        categorized.item_count(),
        categorized.warnings.len()
    );

    Ok(ShoppingPlan { categorized, route })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Zone;

    fn registry() -> ZoneRegistry {
        ZoneRegistry::from_entries([
            ("a", Zone::from_coords(1, &[(0, 0), (10, 0), (10, 10), (0, 10)])),
            ("b", Zone::from_coords(2, &[(20, 0), (30, 0), (30, 10), (20, 10)])),
        ])
        .unwrap()
    }

    #[test]
    fn test_only_one_zone_visited() {
        let plan = plan_trip(vec![("tej", "a"), ("vaj", "a")], &registry()).unwrap();
        assert_eq!(plan.route.len(), 1);
        assert!(plan.segments().is_empty());
    }

    #[test]
    fn test_route_length_matches_matched_categories() {
        let pairs = vec![("1", "b"), ("2", "xyz"), ("3", "a"), ("4", "b")];
        let plan = plan_trip(pairs, &registry()).unwrap();

        assert_eq!(plan.route.len(), plan.categorized.matched.len());
        assert_eq!(plan.segments().len(), plan.route.len().saturating_sub(1));
        let stops: Vec<&str> = plan.route.stops.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(stops, vec!["a", "b"]);
        assert_eq!(plan.categorized.warnings.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        let plan = plan_trip(Vec::<(String, String)>::new(), &registry()).unwrap();
        assert!(plan.categorized.is_empty());
        assert!(plan.route.is_empty());
        assert!(plan.segments().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let pairs = vec![("1", "b"), ("2", "a"), ("3", "xyz")];
        let first = plan_trip(pairs.clone(), &registry()).unwrap();
        let second = plan_trip(pairs, &registry()).unwrap();
        assert_eq!(first, second);
    }
}
