use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use super::picking::Ray;

/// Projection mode of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// View state of a 3D viewport region.
///
/// The eye sits at `target + rotation * (0, 0, distance)` and looks along
/// `rotation * -Z`, so the identity rotation is the top view (looking down onto
/// the drafting plane with +Y up on screen).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCamera {
    /// View orientation
    pub rotation: Quat,
    /// Point the view orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Vertical field of view (radians); also sizes the orthographic frustum
    pub fov: f32,
    pub projection: Projection,
    /// Region size in pixels
    pub viewport: Vec2,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0))
    }
}

impl ViewCamera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            rotation: Quat::from_rotation_z(0.6) * Quat::from_rotation_x(0.9),
            target: Vec3::ZERO,
            distance: 10.0,
            fov: 45.0_f32.to_radians(),
            projection: Projection::Perspective,
            viewport,
        }
    }

    /// Top orthographic view: the fixed convention while drafting
    pub fn set_top_view(&mut self) {
        self.projection = Projection::Orthographic;
        self.rotation = Quat::IDENTITY;
    }

    pub fn is_top_view(&self) -> bool {
        self.projection == Projection::Orthographic && self.rotation == Quat::IDENTITY
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        if size.x > 0.0 && size.y > 0.0 {
            self.viewport = size;
        }
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(0.5, 500.0);
    }

    /// Pan by a pixel delta, keeping the point under the cursor fixed
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let world_per_px = 2.0 * self.half_height() / self.viewport.y;
        let right = self.rotation * Vec3::X;
        let up = self.rotation * Vec3::Y;
        self.target += (-right * dx + up * dy) * world_per_px;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        self.target + self.rotation * Vec3::new(0.0, 0.0, self.distance)
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(
            self.eye_position(),
            self.rotation * Vec3::NEG_Z,
            self.rotation * Vec3::Y,
        )
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.aspect();
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 1000.0),
            Projection::Orthographic => {
                let hh = self.half_height();
                let hw = hh * aspect;
                Mat4::orthographic_rh_gl(-hw, hw, -hh, hh, 0.1, 1000.0)
            }
        }
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to viewport pixels.
    /// Returns None behind the camera or outside the viewport rectangle.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return None;
        }
        Some(self.ndc_to_screen(Vec2::new(ndc.x, ndc.y)))
    }

    /// Cast a ray from a viewport pixel into the scene
    pub fn screen_ray(&self, screen_pos: Vec2) -> Ray {
        let ndc_x = screen_pos.x / self.viewport.x * 2.0 - 1.0;
        let ndc_y = 1.0 - screen_pos.y / self.viewport.y * 2.0;

        let vp_inv = self.view_projection().inverse();
        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: near,
            direction: (far - near).normalize_or_zero(),
        }
    }

    fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }

    fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    fn half_height(&self) -> f32 {
        self.distance * (self.fov * 0.5).tan()
    }
}
