pub mod colors;
pub mod components;
pub mod map_renderer;
pub mod svg_utils;

pub use map_renderer::{RenderOptions, render_route_map, render_route_svg};
pub use svg_utils::{save_route_map_to_dir, xml_escape};
