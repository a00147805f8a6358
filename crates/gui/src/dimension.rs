//! Linear dimension annotation geometry
//!
//! A dimension between two anchors is a line segment, two perpendicular end ticks and a
//! centred label placed at the midpoint, turned to run along the line and scaled with the
//! measured length.

use glam::{Mat3, Quat, Vec3};

use crate::state::settings::DimensionSettings;

/// Everything needed to build a dimension annotation in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct LinearDimension {
    pub start: Vec3,
    pub end: Vec3,
    /// Tick segments at `start` and `end`
    pub ticks: [[Vec3; 2]; 2],
    pub label: String,
    pub label_location: Vec3,
    pub label_rotation: Quat,
    pub label_scale: f32,
}

impl LinearDimension {
    pub fn new(start: Vec3, end: Vec3, settings: &DimensionSettings) -> Self {
        let distance = start.distance(end);
        let direction = (end - start).normalize_or_zero();
        let offset = direction.cross(Vec3::Z) * distance * settings.tick_factor;

        Self {
            start,
            end,
            ticks: [start, end].map(|p| [p - offset, p + offset]),
            label: format_length(distance),
            label_location: (start + end) * 0.5,
            label_rotation: track_x_up_z(direction),
            label_scale: distance * settings.text_scale_factor,
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Decimal places in every dimension label
pub const LABEL_DECIMALS: usize = 2;

/// Measured length with exactly [`LABEL_DECIMALS`] decimals
pub fn format_length(distance: f32) -> String {
    format!("{:.*}", LABEL_DECIMALS, distance)
}

/// Rotation taking local +X onto `direction` while keeping local +Z as close to world +Z
/// as possible. Identity for a zero direction.
pub fn track_x_up_z(direction: Vec3) -> Quat {
    if direction == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let x = direction.normalize();
    let y = Vec3::Z.cross(x);
    if y.length_squared() < 1e-12 {
        // Vertical line: no horizontal reference, rotate X straight onto it
        return Quat::from_rotation_arc(Vec3::X, x);
    }
    let y = y.normalize();
    let z = x.cross(y);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(a: Vec3, b: Vec3) -> LinearDimension {
        LinearDimension::new(a, b, &DimensionSettings::default())
    }

    #[test]
    fn test_label_three_four_five() {
        let d = dim(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(d.label, "5.00");
        assert_eq!(d.label_location, Vec3::new(1.5, 2.0, 0.0));
        assert!((d.label_scale - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_label_always_two_decimals() {
        assert_eq!(format_length(1.0 / 3.0), "0.33");
        assert_eq!(format_length(2.0), "2.00");
        assert_eq!(format_length(0.0), "0.00");
        assert_eq!(format_length(1234.5), "1234.50");
    }

    #[test]
    fn test_rotation_aligns_x_with_line() {
        let d = dim(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        let x = d.label_rotation * Vec3::X;
        assert!((x - Vec3::Y).length() < 1e-5);
        let z = d.label_rotation * Vec3::Z;
        assert!((z - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_ticks_perpendicular() {
        let d = dim(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        // direction x Z = -Y, length 10 * 0.05
        let [s0, s1] = d.ticks[0];
        assert!((s0 - Vec3::new(0.0, 0.5, 0.0)).length() < 1e-5);
        assert!((s1 - Vec3::new(0.0, -0.5, 0.0)).length() < 1e-5);
        let [e0, e1] = d.ticks[1];
        assert!((e0 - Vec3::new(10.0, 0.5, 0.0)).length() < 1e-5);
        assert!((e1 - Vec3::new(10.0, -0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_length() {
        let p = Vec3::new(1.0, 1.0, 0.0);
        let d = dim(p, p);
        assert_eq!(d.label, "0.00");
        assert_eq!(d.label_rotation, Quat::IDENTITY);
        assert_eq!(d.label_scale, 0.0);
        assert_eq!(d.ticks, [[p, p], [p, p]]);
    }

    #[test]
    fn test_vertical_direction() {
        let q = track_x_up_z(Vec3::Z);
        assert!((q * Vec3::X - Vec3::Z).length() < 1e-5);
    }
}
