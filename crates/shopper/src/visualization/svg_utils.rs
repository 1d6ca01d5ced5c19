use std::fs;
use std::path::{Path, PathBuf};

use super::map_renderer::{RenderOptions, render_route_map};
use crate::config::MapConfig;
use crate::error::Result;
use crate::plan::ShoppingPlan;
use crate::zones::ZoneRegistry;

/// XMLエスケープ（SVGテキスト・属性用）
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 出力ディレクトリにタイムスタンプ付きでルート図を保存
pub fn save_route_map_to_dir<P: AsRef<Path>>(
    plan: &ShoppingPlan,
    registry: &ZoneRegistry,
    map: &MapConfig,
    opt: &RenderOptions,
    output_dir: P,
) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let output_path = output_dir.join(format!("route_{}.svg", timestamp));

    render_route_map(plan, registry, map, opt, &output_path)?;
    Ok(output_path)
}
