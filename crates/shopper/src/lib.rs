pub mod categorize;
pub mod config;
pub mod constants;
pub mod csv_reader;
pub mod error;
pub mod plan;
pub mod report;
pub mod route;
pub mod visualization;
pub mod zones;

pub use categorize::{CategoryGroup, Categorized, UnknownCategory, categorize};
pub use config::Config;
pub use csv_reader::{ShoppingEntry, read_shopping_list};
pub use error::{Result, ShopperError};
pub use plan::{ShoppingPlan, plan_trip};
pub use report::{UnmatchedPolicy, write_report};
pub use route::{Route, RouteStop, Segment, build_route};
pub use visualization::{RenderOptions, render_route_map, save_route_map_to_dir};
pub use zones::{Centroid, Point, Zone, ZoneRegistry};
