/// Expected headers in the shopping list CSV
pub const EXPECTED_ITEM_HEADER: &str = "Item"; // Item column header
pub const EXPECTED_CATEGORY_HEADER: &str = "Category"; // Category column header

/// Minimum vertex count for a zone polygon loaded from config
pub const MIN_POLYGON_POINTS: usize = 3;

/// Default CLI paths
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const DEFAULT_LIST_PATH: &str = "shoppinglist.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "figs";

/// Overlay styling (map pixels)
pub const ZONE_STROKE_WIDTH: f64 = 2.0;
pub const ROUTE_STROKE_WIDTH: f64 = 6.0;
pub const ROUTE_DASH: &str = "24 12";
pub const STOP_RADIUS: f64 = 18.0;
pub const LABEL_FONT_SIZE: f64 = 64.0;
