use crate::{
    categorize::CategoryGroup,
    error::{Result, ShopperError},
    zones::{Centroid, ZoneRegistry},
};
use itertools::Itertools;
use serde::Serialize;

/// One visited zone on the walk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    pub category: String,
    pub order: i64,
    pub centroid: Centroid,
}

/// Directed walking step between two consecutive stops
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Centroid,
    pub to: Centroid,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub stops: Vec<RouteStop>,
}

impl Route {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Centroids in visit order
    pub fn points(&self) -> Vec<Centroid> {
        self.stops.iter().map(|s| s.centroid).collect()
    }

    /// One segment per adjacent pair of stops; empty below two stops
    pub fn segments(&self) -> Vec<Segment> {
        self.stops
            .iter()
            .tuple_windows()
            .map(|(a, b)| Segment {
                from: a.centroid,
                to: b.centroid,
            })
            .collect()
    }

    /// Straight-line walking distance in map pixels
    pub fn total_length(&self) -> f64 {
        self.segments().iter().map(Segment::length).sum()
    }
}

/// Builds the route through the zones of the ordered groups.
///
/// Groups without a registered zone are skipped. A zone with an empty
/// polygon fails with [`ShopperError::Validation`].
pub fn build_route(groups: &[CategoryGroup], registry: &ZoneRegistry) -> Result<Route> {
    let mut stops = Vec::with_capacity(groups.len());

    for group in groups {
        let Some(zone) = registry.get(&group.category) else {
            log::debug!("no zone for '{}', skipped on route", group.category);
            continue;
        };

        let centroid = zone.centroid().ok_or_else(|| ShopperError::Validation {
            category: group.category.clone(),
            message: "polygon has no vertices".to_string(),
        })?;

        stops.push(RouteStop {
            category: group.category.clone(),
            order: zone.order,
            centroid,
        });
    }

    Ok(Route { stops })
}
