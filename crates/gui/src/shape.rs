//! Shape generators: pure mappings from two anchors to a vertex outline.
//!
//! Every generated point lies in the drafting plane through the first anchor
//! (z equals `a.z`).

use glam::Vec3;
use shared::ShapeSpec;

/// Number of points used to approximate a circle
pub const CIRCLE_SEGMENTS: u32 = 8;

pub const MIN_POLYGON_SIDES: u32 = 3;
pub const MAX_POLYGON_SIDES: u32 = 64;

/// Generated vertex list plus whether the outline closes on itself
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Vec3>,
    pub cyclic: bool,
}

/// Line from `a` to `b`
pub fn line(a: Vec3, b: Vec3) -> Outline {
    Outline {
        points: vec![a, b],
        cyclic: false,
    }
}

/// Axis-aligned rectangle with `a` and `b` as opposite corners
pub fn rectangle(a: Vec3, b: Vec3) -> Outline {
    Outline {
        points: vec![
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, b.y, a.z),
        ],
        cyclic: true,
    }
}

/// Circle centred on `a` through `b`, approximated by [`CIRCLE_SEGMENTS`] points
pub fn circle(a: Vec3, b: Vec3) -> Outline {
    Outline {
        points: ring(a, a.distance(b), CIRCLE_SEGMENTS),
        cyclic: true,
    }
}

/// Regular polygon centred on `a` with its first vertex at angle 0, radius `|b - a|`.
/// The side count is clamped to 3..=64.
pub fn polygon(a: Vec3, b: Vec3, sides: u32) -> Outline {
    let sides = sides.clamp(MIN_POLYGON_SIDES, MAX_POLYGON_SIDES);
    Outline {
        points: ring(a, a.distance(b), sides),
        cyclic: true,
    }
}

/// Dispatch on the shape variant
pub fn generate(spec: ShapeSpec, a: Vec3, b: Vec3) -> Outline {
    match spec {
        ShapeSpec::Line => line(a, b),
        ShapeSpec::Rectangle => rectangle(a, b),
        ShapeSpec::Circle => circle(a, b),
        ShapeSpec::Polygon { sides } => polygon(a, b, sides),
    }
}

fn ring(center: Vec3, radius: f32, count: u32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / count as f32;
            Vec3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                center.z,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_line() {
        let a = Vec3::new(1.0, 2.0, 0.0);
        let b = Vec3::new(4.0, 6.0, 0.0);
        let o = line(a, b);
        assert_eq!(o.points, vec![a, b]);
        assert!(!o.cyclic);
    }

    #[test]
    fn test_rectangle_corners_in_order() {
        let o = rectangle(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 0.0));
        assert!(o.cyclic);
        assert_eq!(
            o.points,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(2.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_is_idempotent() {
        let a = Vec3::new(-3.5, 2.25, 0.0);
        let b = Vec3::new(1.0, -4.0, 0.0);
        assert_eq!(rectangle(a, b), rectangle(a, b));
    }

    #[test]
    fn test_rectangle_flattens_to_first_anchor() {
        let o = rectangle(Vec3::new(0.0, 0.0, 1.5), Vec3::new(1.0, 1.0, 9.0));
        assert!(o.points.iter().all(|p| p.z == 1.5));
    }

    #[test]
    fn test_circle_always_eight_points() {
        for radius in [0.0, 0.001, 1.0, 250.0] {
            let o = circle(Vec3::ZERO, Vec3::new(radius, 0.0, 0.0));
            assert_eq!(o.points.len(), 8);
            assert!(o.cyclic);
        }
    }

    #[test]
    fn test_circle_points_on_radius() {
        let center = Vec3::new(1.0, 1.0, 0.0);
        let o = circle(center, Vec3::new(4.0, 5.0, 0.0));
        for p in &o.points {
            assert!((p.distance(center) - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn test_square_polygon() {
        let center = Vec3::new(2.0, -1.0, 0.0);
        let o = polygon(center, Vec3::new(5.0, -1.0, 0.0), 4);
        assert_eq!(o.points.len(), 4);
        for p in &o.points {
            assert!((p.distance(center) - 3.0).abs() < EPS);
        }
        // Starts at angle 0
        assert!((o.points[0] - Vec3::new(5.0, -1.0, 0.0)).length() < EPS);
        for i in 0..4 {
            let u = o.points[i] - center;
            let v = o.points[(i + 1) % 4] - center;
            let angle = u.angle_between(v);
            assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        }
    }

    #[test]
    fn test_polygon_sides_clamped() {
        let b = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(polygon(Vec3::ZERO, b, 1).points.len(), 3);
        assert_eq!(polygon(Vec3::ZERO, b, 200).points.len(), 64);
        assert_eq!(polygon(Vec3::ZERO, b, 6).points.len(), 6);
    }

    #[test]
    fn test_polygon_keeps_anchor_z() {
        let o = polygon(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 3.0, 0.0), 5);
        assert!(o.points.iter().all(|p| p.z == 2.0));
    }

    #[test]
    fn test_generate_dispatch() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(generate(ShapeSpec::Line, a, b).points.len(), 2);
        assert_eq!(generate(ShapeSpec::Rectangle, a, b).points.len(), 4);
        assert_eq!(generate(ShapeSpec::Circle, a, b).points.len(), 8);
        assert_eq!(generate(ShapeSpec::Polygon { sides: 7 }, a, b).points.len(), 7);
    }
}
