use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::colors;
use super::components::*;
use super::svg_utils::xml_escape;
use crate::config::MapConfig;
use crate::error::Result;
use crate::plan::ShoppingPlan;
use crate::zones::ZoneRegistry;

/// 描画オプション
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// 地図画像を背景として参照する
    pub show_background: bool,
    /// 訪問しないゾーンも灰色で描く
    pub show_all_zones: bool,
    /// 停留点に訪問順の番号を付ける
    pub show_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_background: true,
            show_all_zones: false,
            show_labels: true,
        }
    }
}

/// ルート図をファイルに書き出す
pub fn render_route_map<P: AsRef<Path>>(
    plan: &ShoppingPlan,
    registry: &ZoneRegistry,
    map: &MapConfig,
    opt: &RenderOptions,
    output_path: P,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut f = BufWriter::new(file);
    render_route_svg(plan, registry, map, opt, &mut f)?;
    f.flush()?;
    Ok(())
}

/// 地図座標（画像ピクセル）のままSVGを生成
pub fn render_route_svg<W: Write>(
    plan: &ShoppingPlan,
    registry: &ZoneRegistry,
    map: &MapConfig,
    opt: &RenderOptions,
    w: &mut W,
) -> Result<()> {
    let (width, height) = (map.width, map.height);

    // SVGヘッダー
    writeln!(
        w,
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"##,
        width, height, width, height
    )?;

    match map.image.as_deref() {
        Some(image) if opt.show_background => writeln!(
            w,
            r##"<image href="{}" xlink:href="{}" x="0" y="0" width="{}" height="{}"/>"##,
            xml_escape(image),
            xml_escape(image),
            width,
            height
        )?,
        _ => writeln!(
            w,
            r##"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"##,
            width, height
        )?,
    }

    render_arrow_marker_defs(w)?;

    let visited: HashSet<&str> = plan
        .route
        .stops
        .iter()
        .map(|s| s.category.as_str())
        .collect();

    if opt.show_all_zones {
        for (category, zone) in registry.iter() {
            if !visited.contains(category) {
                render_zone_outline(w, category, zone, colors::IDLE_ZONE)?;
            }
        }
    }

    // 訪問順にゾーン枠を描画
    for stop in &plan.route.stops {
        if let Some(zone) = registry.get(&stop.category) {
            render_zone_outline(w, &stop.category, zone, colors::VISITED_ZONE)?;
        }
    }

    render_route_line(w, &plan.route.points())?;
    render_segment_arrows(w, &plan.segments())?;

    for (i, stop) in plan.route.stops.iter().enumerate() {
        render_stop(w, i + 1, &stop.category, stop.centroid, opt.show_labels)?;
    }

    writeln!(w, "</svg>")?;
    log::debug!(
        "rendered {} zones and {} segments",
        plan.route.len(),
        plan.segments().len()
    );
    Ok(())
}
