use crate::{
    constants::MIN_POLYGON_POINTS,
    error::{Result, ShopperError},
};
use serde::Serialize;
use std::collections::HashMap;

/// Map pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

/// Zone location on the map (mean of the polygon vertices)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Store zone: visit order plus outline polygon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    /// Sort key only; gaps and duplicates are allowed
    pub order: i64,
    pub polygon: Vec<Point>,
}

impl Zone {
    pub fn new(order: i64, polygon: Vec<Point>) -> Self {
        Self { order, polygon }
    }

    pub fn from_coords(order: i64, coords: &[(i64, i64)]) -> Self {
        Self::new(order, coords.iter().copied().map(Point::from).collect())
    }

    /// Arithmetic mean of the vertices, `None` for an empty polygon
    pub fn centroid(&self) -> Option<Centroid> {
        if self.polygon.is_empty() {
            return None;
        }

        let (sum_x, sum_y) = self
            .polygon
            .iter()
            .fold((0.0_f64, 0.0_f64), |acc, p| (acc.0 + p.x as f64, acc.1 + p.y as f64));
        let n = self.polygon.len() as f64;
        Some(Centroid::new(sum_x / n, sum_y / n))
    }
}

/// Category → zone mapping that keeps the order entries were supplied in.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    entries: Vec<(String, Zone)>,
    index: HashMap<String, usize>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(category, zone)` pairs, rejecting duplicate categories
    pub fn from_entries<S, I>(entries: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Zone)>,
    {
        let mut registry = Self::new();
        for (category, zone) in entries {
            registry.insert(category, zone)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, category: impl Into<String>, zone: Zone) -> Result<()> {
        let category = category.into();
        if self.index.contains_key(&category) {
            return Err(ShopperError::Config(format!(
                "duplicate zone for category '{}'",
                category
            )));
        }
        self.index.insert(category.clone(), self.entries.len());
        self.entries.push((category, zone));
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<&Zone> {
        self.lookup(category).map(|(_, zone)| zone)
    }

    /// Zone together with its position in registry iteration order
    pub fn lookup(&self, category: &str) -> Option<(usize, &Zone)> {
        self.index.get(category).map(|&i| (i, &self.entries[i].1))
    }

    /// Position of the category in registry iteration order
    pub fn position(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Zone)> {
        self.entries.iter().map(|(c, z)| (c.as_str(), z))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every polygon must have at least three vertices
    pub fn validate(&self) -> Result<()> {
        for (category, zone) in &self.entries {
            if zone.polygon.len() < MIN_POLYGON_POINTS {
                return Err(ShopperError::Validation {
                    category: category.clone(),
                    message: format!(
                        "polygon needs at least {} points, got {}",
                        MIN_POLYGON_POINTS,
                        zone.polygon.len()
                    ),
                });
            }
        }
        Ok(())
    }
}
