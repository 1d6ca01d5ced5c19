use std::io::Write;

use super::colors;
use super::svg_utils::xml_escape;
use crate::constants::{
    LABEL_FONT_SIZE, ROUTE_DASH, ROUTE_STROKE_WIDTH, STOP_RADIUS, ZONE_STROKE_WIDTH,
};
use crate::error::Result;
use crate::route::Segment;
use crate::zones::{Centroid, Zone};

const ARROW_MARKER_ID: &str = "route-arrow";

/// 矢印マーカーの定義
pub fn render_arrow_marker_defs<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w, "<defs>")?;
    writeln!(
        w,
        r##"<marker id="{}" viewBox="0 0 10 10" refX="9" refY="5" markerWidth="6" markerHeight="6" orient="auto-start-reverse"><path d="M 0 0 L 10 5 L 0 10 z" fill="{}"/></marker>"##,
        ARROW_MARKER_ID,
        colors::ROUTE
    )?;
    writeln!(w, "</defs>")?;
    Ok(())
}

/// ゾーンの多角形（閉じた枠線のみ）
pub fn render_zone_outline<W: Write>(
    w: &mut W,
    category: &str,
    zone: &Zone,
    stroke: &str,
) -> Result<()> {
    let points = zone
        .polygon
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        w,
        r##"<polygon data-category="{}" points="{}" fill="none" stroke="{}" stroke-width="{}"/>"##,
        xml_escape(category),
        points,
        stroke,
        ZONE_STROKE_WIDTH
    )?;
    Ok(())
}

/// 重心を結ぶ破線
pub fn render_route_line<W: Write>(w: &mut W, points: &[Centroid]) -> Result<()> {
    if points.len() < 2 {
        return Ok(());
    }

    let coords = points
        .iter()
        .map(|c| format!("{:.1},{:.1}", c.x, c.y))
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        w,
        r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{}"/>"##,
        coords,
        colors::ROUTE,
        ROUTE_STROKE_WIDTH,
        ROUTE_DASH
    )?;
    Ok(())
}

/// 区間ごとの矢印
pub fn render_segment_arrows<W: Write>(w: &mut W, segments: &[Segment]) -> Result<()> {
    for seg in segments {
        writeln!(
            w,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}" marker-end="url(#{})"/>"##,
            seg.from.x,
            seg.from.y,
            seg.to.x,
            seg.to.y,
            colors::ROUTE,
            ROUTE_STROKE_WIDTH / 2.0,
            ARROW_MARKER_ID
        )?;
    }
    Ok(())
}

/// 停留点（訪問順の番号付き）
pub fn render_stop<W: Write>(
    w: &mut W,
    number: usize,
    category: &str,
    centroid: Centroid,
    show_label: bool,
) -> Result<()> {
    writeln!(
        w,
        r##"<circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"><title>{}</title></circle>"##,
        centroid.x,
        centroid.y,
        STOP_RADIUS,
        colors::ROUTE,
        xml_escape(category)
    )?;

    if show_label {
        writeln!(
            w,
            r##"<text x="{:.1}" y="{:.1}" font-size="{}" text-anchor="middle" fill="{}" stroke="{}" stroke-width="3" paint-order="stroke">{}</text>"##,
            centroid.x,
            centroid.y - STOP_RADIUS * 1.5,
            LABEL_FONT_SIZE,
            colors::LABEL,
            colors::LABEL_HALO,
            number
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_zone_outline_points() {
        let zone = Zone::from_coords(1, &[(0, 0), (10, 0), (10, 10)]);
        let svg = to_string(|w| render_zone_outline(w, "tej", &zone, colors::VISITED_ZONE));
        assert!(svg.contains(r#"points="0,0 10,0 10,10""#));
        assert!(svg.contains(r#"data-category="tej""#));
    }

    #[test]
    fn test_route_line_needs_two_points() {
        let one = to_string(|w| render_route_line(w, &[Centroid::new(1.0, 2.0)]));
        assert!(one.is_empty());

        let two = to_string(|w| {
            render_route_line(w, &[Centroid::new(1.0, 2.0), Centroid::new(3.0, 4.0)])
        });
        assert!(two.contains(r#"points="1.0,2.0 3.0,4.0""#));
    }

    #[test]
    fn test_one_arrow_per_segment() {
        let segments = [
            Segment {
                from: Centroid::new(0.0, 0.0),
                to: Centroid::new(5.0, 0.0),
            },
            Segment {
                from: Centroid::new(5.0, 0.0),
                to: Centroid::new(5.0, 5.0),
            },
        ];
        let svg = to_string(|w| render_segment_arrows(w, &segments));
        assert_eq!(svg.matches("marker-end").count(), 2);
    }
}
