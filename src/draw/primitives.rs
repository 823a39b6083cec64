//! Stateless shape helpers. Every function strokes one or more closed or open paths with the
//! pen's current stroke settings.
//!
//! Rotations passed to polygon helpers are measured clockwise from 12 o'clock so that layered
//! shapes share vertices when they share a rotation.

use std::f64::consts::PI;

use crate::draw::pen::{Pen, circle_path};
use crate::foundation::core::{BezPath, Point, TOP, polar};
use crate::foundation::math::slot_angle;

pub fn circle(pen: &mut Pen<'_>, center: Point, r: f64) {
    pen.stroke(&circle_path(center, r));
}

/// Closed path through `sides` evenly spaced vertices, first vertex at `rotation` from the top.
pub fn polygon_path(center: Point, r: f64, sides: usize, rotation: f64) -> BezPath {
    let mut path = BezPath::new();
    if sides == 0 {
        return path;
    }
    for i in 0..sides {
        let p = polar(center, r, slot_angle(i, sides, TOP + rotation));
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

pub fn regular_polygon(pen: &mut Pen<'_>, center: Point, r: f64, sides: usize, rotation: f64) {
    pen.stroke(&polygon_path(center, r, sides, rotation));
}

/// Star joining every second of `points` vertices, first vertex at the top.
///
/// Odd counts give a single closed star (5 gives the pentagram).
pub fn star(pen: &mut Pen<'_>, center: Point, r: f64, points: usize) {
    if points == 0 {
        return;
    }
    let mut path = BezPath::new();
    for i in 0..points {
        let p = polar(center, r, slot_angle((i * 2) % points, points, TOP));
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    pen.stroke(&path);
}

/// Two inscribed triangles, the second turned half a revolution from the first.
pub fn hexagram(pen: &mut Pen<'_>, center: Point, r: f64, rotation: f64) {
    regular_polygon(pen, center, r, 3, rotation);
    regular_polygon(pen, center, r, 3, rotation + PI);
}

/// Straight stroke along `angle` from radius `r_start` to radius `r_end`.
pub fn radial_tick(pen: &mut Pen<'_>, center: Point, r_start: f64, r_end: f64, angle: f64) {
    line(
        pen,
        polar(center, r_start, angle),
        polar(center, r_end, angle),
    );
}

pub fn line(pen: &mut Pen<'_>, from: Point, to: Point) {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    pen.stroke(&path);
}

#[cfg(test)]
#[path = "../../tests/unit/draw/primitives.rs"]
mod tests;
