//! Orbit camera and the pointer viewport
//!
//! The camera orbits the origin on a sphere. The tracker does not follow the
//! orbit: pointer positions map onto the z = 0 plane in world space, sized by
//! what the camera sees at its target distance.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use super::config::CameraConfig;
use super::field::spherical_to_cartesian;

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
/// Keeps the eye off the Y axis, where `look_at` with +Y up degenerates
const POLE_MARGIN: f32 = 1e-3;

/// Size of the visible plane at the orbit target, in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Map a pointer in normalized device coordinates ([-1, 1] on both axes,
    /// +Y up) onto the z = 0 plane.
    #[inline]
    pub fn pointer_to_world(&self, ndc: Vec2) -> Vec3 {
        Vec3::new(ndc.x * self.width * 0.5, ndc.y * self.height * 0.5, 0.0)
    }
}

/// Camera orbiting the origin with auto-rotation and clamped polar angle
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    fov_y: f32,
    distance: f32,
    auto_rotate_speed: f32,
    min_polar: f32,
    max_polar: f32,
    /// Angle from +Y
    polar: f32,
    /// Angle around Y, 0 = looking down -Z from +Z
    azimuth: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            fov_y: config.fov_degrees.to_radians(),
            distance: config.distance,
            auto_rotate_speed: config.auto_rotate_speed,
            min_polar: config.min_polar.max(POLE_MARGIN),
            max_polar: config.max_polar.min(PI - POLE_MARGIN),
            polar: FRAC_PI_2
                .clamp(config.min_polar, config.max_polar)
                .clamp(POLE_MARGIN, PI - POLE_MARGIN),
            azimuth: 0.0,
        }
    }

    /// Auto-rotate by `dt` seconds. Speed 1.0 is one orbit per minute.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate_speed == 0.0 {
            return;
        }
        self.azimuth = (self.azimuth + TAU / 60.0 * self.auto_rotate_speed * dt) % TAU;
    }

    /// Apply a user drag, in radians
    pub fn drag(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth = (self.azimuth + d_azimuth) % TAU;
        self.polar = (self.polar + d_polar).clamp(self.min_polar, self.max_polar);
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn eye(&self) -> Vec3 {
        spherical_to_cartesian(self.distance, self.polar, self.azimuth)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh_gl(self.fov_y, aspect, NEAR, FAR);
        proj * view
    }

    /// Project a world position to NDC. `None` if behind the camera.
    pub fn project(&self, world: Vec3, aspect: f32) -> Option<Vec2> {
        project_with(&self.view_proj(aspect), world)
    }

    /// Screen pixels per world unit at `world`, for perspective point sizes
    pub fn pixels_per_unit(&self, world: Vec3, screen_height: f32) -> f32 {
        let depth = (world - self.eye()).length().max(NEAR);
        screen_height / (2.0 * (self.fov_y * 0.5).tan() * depth)
    }

    /// Visible plane at the orbit target for the given aspect ratio
    pub fn viewport(&self, aspect: f32) -> Viewport {
        let height = 2.0 * (self.fov_y * 0.5).tan() * self.distance;
        Viewport::new(height * aspect, height)
    }
}

/// Project with a precomputed view-projection matrix, for batches
#[inline]
pub fn project_with(view_proj: &Mat4, world: Vec3) -> Option<Vec2> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    Some(clip.xy() / clip.w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(&CameraConfig::default())
    }

    #[test]
    fn test_initial_eye() {
        let eye = camera().eye();
        assert!((eye - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn test_viewport_from_fov() {
        let vp = camera().viewport(2.0);
        // 2 * tan(30°) * 15
        assert!((vp.height - 17.3205).abs() < 1e-3, "{}", vp.height);
        assert!((vp.width - vp.height * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_to_world() {
        let vp = Viewport::new(20.0, 10.0);
        assert_eq!(vp.pointer_to_world(Vec2::ZERO), Vec3::ZERO);
        assert_eq!(vp.pointer_to_world(Vec2::new(1.0, -1.0)), Vec3::new(10.0, -5.0, 0.0));
        assert_eq!(vp.pointer_to_world(Vec2::new(-0.5, 0.5)), Vec3::new(-5.0, 2.5, 0.0));
    }

    #[test]
    fn test_pointer_maps_back_to_itself() {
        // A pointer mapped onto the target plane projects to the same NDC
        // while the camera still faces down -Z.
        let cam = camera();
        let vp = cam.viewport(1.5);
        let ndc = Vec2::new(0.4, -0.3);
        let projected = cam.project(vp.pointer_to_world(ndc), 1.5).unwrap();
        assert!((projected - ndc).length() < 1e-4, "{projected:?}");
    }

    #[test]
    fn test_pixels_per_unit_at_target() {
        let cam = camera();
        let vp = cam.viewport(1.0);
        // The whole visible height at the target spans the screen
        let ppu = cam.pixels_per_unit(Vec3::ZERO, 800.0);
        assert!((ppu * vp.height - 800.0).abs() < 1e-2);
        assert!(cam.pixels_per_unit(Vec3::new(0.0, 0.0, -15.0), 800.0) < ppu);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        assert!(camera().project(Vec3::new(0.0, 0.0, 30.0), 1.0).is_none());
    }

    #[test]
    fn test_auto_rotate_rate() {
        let mut cam = camera();
        // speed 0.5: half an orbit per minute
        cam.advance(30.0);
        assert!((cam.azimuth() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_drag_clamps_polar() {
        let mut cam = OrbitCamera::new(&CameraConfig {
            min_polar: PI / 3.0,
            max_polar: PI / 1.5,
            ..CameraConfig::default()
        });
        cam.drag(0.0, 10.0);
        assert!((cam.polar() - std::f32::consts::PI / 1.5).abs() < 1e-6);
        cam.drag(0.0, -10.0);
        assert!((cam.polar() - std::f32::consts::PI / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_unclamped_drag_stops_short_of_poles() {
        let mut cam = camera();
        cam.drag(0.0, 10.0);
        assert!(cam.polar() < PI);
        assert!(cam.view_proj(1.0).is_finite());
        cam.drag(0.0, -10.0);
        assert!(cam.polar() > 0.0);
        assert!(cam.view_proj(1.0).is_finite());
    }
}
