//! Back-of-card motifs. Every tiling covers the fixed 400x700 card and is fully deterministic.

use std::f64::consts::PI;

use crate::deck::catalog::BackPattern;
use crate::foundation::core::{CARD_CENTER, Point, Rgba8};
use crate::geometry::shapes::{circle, heart_ops, polyline, star_ops};
use crate::render::plan::{DrawOp, StrokeStyle};

const MOTIF_FILL_ALPHA: u8 = 0x40;
const GRID_LINE_ALPHA: u8 = 0x60;

/// Draw ops for `pattern` in the accent color. `None` draws nothing.
pub fn back_pattern_ops(pattern: Option<BackPattern>, accent: Rgba8) -> Vec<DrawOp> {
    match pattern {
        Some(BackPattern::CelestialGrid) => celestial_grid(accent),
        Some(BackPattern::Heraldic) => heraldic(accent),
        Some(BackPattern::Astrological) => astrological(accent),
        Some(BackPattern::GoldLeaf) => gold_leaf(accent),
        None => Vec::new(),
    }
}

/// Grid lines every 50 units from 50 up to (not including) 350, with a dot on each diagonal
/// crossing.
pub fn celestial_grid(accent: Rgba8) -> Vec<DrawOp> {
    let line = accent.with_alpha(GRID_LINE_ALPHA);
    let dot = accent.with_alpha(MOTIF_FILL_ALPHA);
    let mut ops = Vec::new();
    for i in (50..350).step_by(50) {
        let i = f64::from(i);
        for (a, b) in [
            (Point::new(i, 50.0), Point::new(i, 650.0)),
            (Point::new(50.0, i), Point::new(350.0, i)),
        ] {
            ops.push(DrawOp::StrokePath {
                path: polyline([a, b]),
                color: line,
                style: StrokeStyle::plain(1.0),
                glow: None,
            });
        }
        ops.push(DrawOp::FillPath {
            path: circle(Point::new(i, i), 5.0),
            color: dot,
        });
    }
    ops
}

/// Two columns by five rows of five-pointed stars at 100-unit spacing.
pub fn heraldic(accent: Rgba8) -> Vec<DrawOp> {
    let fill = accent.with_alpha(MOTIF_FILL_ALPHA);
    let mut ops = Vec::new();
    for y in (100..600).step_by(100) {
        for x in (100..300).step_by(100) {
            let center = Point::new(f64::from(x), f64::from(y));
            ops.extend(star_ops(center, (15.0, 7.0), 5, accent, fill, 2.0));
        }
    }
    ops
}

/// Twelve small circles on a radius-80 ring around the card center.
pub fn astrological(accent: Rgba8) -> Vec<DrawOp> {
    ring(12, 80.0)
        .map(|p| DrawOp::StrokePath {
            path: circle(p, 10.0),
            color: accent,
            style: StrokeStyle::plain(2.0),
            glow: None,
        })
        .collect()
}

/// Eight hearts on a radius-100 ring around the card center.
pub fn gold_leaf(accent: Rgba8) -> Vec<DrawOp> {
    let fill = accent.with_alpha(MOTIF_FILL_ALPHA);
    ring(8, 100.0)
        .flat_map(|p| heart_ops(p, 15.0, accent, fill, 2.0))
        .collect()
}

fn ring(count: u32, radius: f64) -> impl Iterator<Item = Point> {
    (0..count).map(move |i| {
        let angle = f64::from(i) * 2.0 * PI / f64::from(count);
        Point::new(
            CARD_CENTER.x + angle.cos() * radius,
            CARD_CENTER.y + angle.sin() * radius,
        )
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/patterns.rs"]
mod tests;
