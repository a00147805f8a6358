//! Dimension annotation objects

use glam::{Vec3, Vec3Swizzles};
use shared::ObjectId;

use super::{CurveData, ObjectData, SceneObject, SceneState, TextAlign, TextData, Transform};
use crate::dimension::LinearDimension;
use crate::state::settings::DimensionSettings;

/// Objects created for one dimension
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionObjects {
    /// Curve holding the measured segment and both end ticks
    pub line: ObjectId,
    /// Text label parented to the line
    pub label: ObjectId,
}

impl SceneState {
    /// Create a dimension between `a` and `b`: a line curve with two tick splines and a
    /// centred text label child. Both use the white material.
    pub fn add_dimension(
        &mut self,
        a: Vec3,
        b: Vec3,
        settings: &DimensionSettings,
    ) -> DimensionObjects {
        let dim = LinearDimension::new(a, b, settings);

        let (line_id, label_id) = self.batch(|state| {
            let white = state.white_material();

            let mut curve = CurveData::poly(vec![dim.start, dim.end], false);
            for tick in dim.ticks {
                curve.push_poly(tick.to_vec());
            }
            let mut line = SceneObject::new("Dimension", ObjectData::Curve(curve));
            line.materials.push(white.clone());
            let line_id = state.insert_object(line);

            let mut label = SceneObject::new(
                "Dimension_Text",
                ObjectData::Text(TextData {
                    body: dim.label.clone(),
                    align_x: TextAlign::Center,
                    align_y: TextAlign::Center,
                }),
            );
            label.transform = Transform {
                location: dim.label_location,
                rotation: dim.label_rotation,
                scale: Vec3::splat(dim.label_scale),
            };
            label.materials.push(white);
            label.parent = Some(line_id.clone());
            let label_id = state.insert_object(label);
            (line_id, label_id)
        });

        tracing::info!(
            "Dimension {} from {:?} to {:?}",
            dim.label,
            dim.start.xy(),
            dim.end.xy()
        );
        DimensionObjects {
            line: line_id,
            label: label_id,
        }
    }
}
