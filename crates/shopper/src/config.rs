use crate::{
    csv_reader::normalize,
    error::{Result, ShopperError},
    report::UnmatchedPolicy,
    zones::{Point, Zone, ZoneRegistry},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub map: MapConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// Zone list; array order is the registry iteration order
    pub zones: Vec<ZoneConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Background image referenced by the overlay (not read)
    #[serde(default)]
    pub image: Option<String>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    pub category: String,
    pub order: i64,
    pub polygon: Vec<[i64; 2]>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShopperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            ShopperError::Config(format!(
                "Failed to load config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        log::info!(
            "loaded {} zones from {}",
            config.zones.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        for zone in &mut config.zones {
            zone.category = normalize(&zone.category);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ShopperError::Config(format!(
                "map size must be positive, got {}x{}",
                self.map.width, self.map.height
            )));
        }

        if self.zones.is_empty() {
            return Err(ShopperError::Config("no zones configured".to_string()));
        }

        let mut seen = HashSet::new();
        for zone in &self.zones {
            if zone.category.is_empty() {
                return Err(ShopperError::Config(
                    "zone category cannot be empty".to_string(),
                ));
            }
            if !seen.insert(zone.category.as_str()) {
                return Err(ShopperError::Config(format!(
                    "duplicate zone for category '{}'",
                    zone.category
                )));
            }
        }

        self.registry()?.validate()
    }

    /// Builds the zone registry in config order
    pub fn registry(&self) -> Result<ZoneRegistry> {
        ZoneRegistry::from_entries(self.zones.iter().map(|z| {
            (
                z.category.clone(),
                Zone::new(z.order, z.polygon.iter().copied().map(Point::from).collect()),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[map]
image = "map.jpg"
width = 100
height = 80

[report]
unmatched = "exclude"

[[zones]]
category = " Tej "
order = 2
polygon = [[0, 0], [10, 0], [10, 10]]

[[zones]]
category = "ital"
order = 1
polygon = [[20, 0], [30, 0], [30, 10], [20, 10]]
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.map.image.as_deref(), Some("map.jpg"));
        assert_eq!(config.report.unmatched, UnmatchedPolicy::Exclude);

        let registry = config.registry().unwrap();
        let names: Vec<&str> = registry.iter().map(|(c, _)| c).collect();
        assert_eq!(names, vec!["tej", "ital"]);
        assert_eq!(registry.get("ital").unwrap().polygon.len(), 4);
    }

    #[test]
    fn test_report_defaults_to_include() {
        let content = SAMPLE.replace("[report]\nunmatched = \"exclude\"\n", "");
        let config = Config::from_toml_str(&content).unwrap();
        assert_eq!(config.report.unmatched, UnmatchedPolicy::Include);
    }

    #[test]
    fn test_duplicate_category_after_normalize() {
        let content = SAMPLE.replace("category = \"ital\"", "category = \"TEJ\"");
        let err = Config::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ShopperError::Config(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn test_short_polygon_rejected() {
        let content = SAMPLE.replace("[[0, 0], [10, 0], [10, 10]]", "[[0, 0], [10, 0]]");
        let err = Config::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ShopperError::Validation { ref category, .. } if category == "tej"));
    }

    #[test]
    fn test_zero_map_size_rejected() {
        let content = SAMPLE.replace("width = 100", "width = 0");
        assert!(Config::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[map\nwidth = ").unwrap_err();
        assert!(matches!(err, ShopperError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.zones.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load_from_file("config/does_not_exist.toml").unwrap_err();
        assert!(matches!(err, ShopperError::Config(_)));
    }
}
