/// Camera — the engine-side camera entity.
///
/// Owns the projection (rendering and culling variants), the post-projection
/// scaling/shift, the pose (model matrix and its inverse, the view matrix),
/// the exposure settings and the focus distance.
///
/// Invalid projection parameters are never rejected: they are replaced by a
/// default frustum and a warning is logged. Exposure parameters are clamped.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec2, DVec3, DVec4, Mat4, Vec4};
use super::exposure::Exposure;
use super::frustum::Frustum;
use super::projection::{self, Fov, Projection, ProjectionParams};

/// Camera data laid out for a uniform buffer (std140 compatible).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub inverse_view: Mat4,
    pub inverse_projection: Mat4,
    /// xyz: world position, w: 1
    pub position: Vec4,
    /// x: exposure, y: ev100, z: near, w: culling far
    pub exposure_near_far: Vec4,
}

/// Engine camera.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendering projection (infinite far plane when perspective)
    projection: DMat4,
    /// Culling projection (finite far plane)
    projection_for_culling: DMat4,
    near: f64,
    far: f64,
    scaling: DVec2,
    shift: DVec2,
    /// Camera-to-world (rigid)
    model: DMat4,
    /// World-to-camera, always `model.inverse()`
    view: DMat4,
    exposure: Exposure,
    focus_distance: f32,
}

impl Camera {
    /// Default focus distance, in world units
    pub const DEFAULT_FOCUS_DISTANCE: f32 = 10.0;

    /// Create a camera at the origin looking down -Z with the default
    /// frustum projection and default exposure.
    pub fn new() -> Self {
        let params = projection::DEFAULT_PROJECTION_PARAMS;
        let (rendering, culling) = projection::build(Projection::Perspective, &params);
        Self {
            projection: rendering,
            projection_for_culling: culling,
            near: params.near,
            far: params.far,
            scaling: DVec2::ONE,
            shift: DVec2::ZERO,
            model: DMat4::IDENTITY,
            view: DMat4::IDENTITY,
            exposure: Exposure::default(),
            focus_distance: Self::DEFAULT_FOCUS_DISTANCE,
        }
    }

    // ===== PROJECTION =====

    /// Set the projection from the six planes of the view volume.
    ///
    /// # Arguments
    ///
    /// * `left`, `right`, `bottom`, `top` - extents on the near plane, in world units
    /// * `near` - distance to the near plane; `> 0` for perspective
    /// * `far` - distance to the far plane; `> near` for perspective, `!= near` for ortho
    ///
    /// Parameters that break these rules are replaced by a default
    /// frustum and a warning is logged (see `ProjectionParams::validated`).
    pub fn set_projection(
        &mut self,
        projection: Projection,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) {
        let requested = ProjectionParams { left, right, bottom, top, near, far };
        let (params, corrected) = requested.validated(projection);
        if corrected {
            crate::engine_warn!("galaxy3d::Camera",
                "Invalid {:?} projection {:?}, using default frustum", projection, requested);
        }

        let (rendering, culling) = projection::build(projection, &params);
        self.projection = rendering;
        self.projection_for_culling = culling;
        self.near = params.near;
        self.far = params.far;
    }

    /// Set a perspective projection from a field of view.
    ///
    /// # Arguments
    ///
    /// * `fov_in_degrees` - full angle along `direction`
    /// * `aspect` - width / height, `> 0`
    /// * `near`, `far` - clipping distances, `0 < near < far`
    pub fn set_projection_fov(&mut self, fov_in_degrees: f64, aspect: f64, near: f64, far: f64, direction: Fov) {
        let p = ProjectionParams::from_fov(fov_in_degrees, aspect, near, far, direction);
        self.set_projection(Projection::Perspective, p.left, p.right, p.bottom, p.top, p.near, p.far);
    }

    /// Set a perspective projection from a lens focal length.
    ///
    /// # Arguments
    ///
    /// * `focal_length_in_millimeters` - lens focal length on a 24mm tall sensor
    /// * `aspect` - width / height, `> 0`
    /// * `near`, `far` - clipping distances, `0 < near < far`
    pub fn set_lens_projection(&mut self, focal_length_in_millimeters: f64, aspect: f64, near: f64, far: f64) {
        let p = ProjectionParams::from_lens(focal_length_in_millimeters, aspect, near, far);
        self.set_projection(Projection::Perspective, p.left, p.right, p.bottom, p.top, p.near, p.far);
    }

    /// Set a custom projection matrix, also used for culling.
    ///
    /// `near` and `far` are informational; they are reported by `near()`
    /// and `culling_far()` but do not alter the matrix.
    pub fn set_custom_projection(&mut self, projection: DMat4, near: f64, far: f64) {
        self.set_custom_projection_with_culling(projection, projection, near, far);
    }

    /// Set custom rendering and culling projection matrices.
    pub fn set_custom_projection_with_culling(&mut self, projection: DMat4, culling: DMat4, near: f64, far: f64) {
        self.projection = projection;
        self.projection_for_culling = culling;
        self.near = near;
        self.far = far;
    }

    /// Set the post-projection scaling (x, y), applied in NDC.
    pub fn set_scaling(&mut self, scaling: DVec2) {
        self.scaling = scaling;
    }

    /// Set the post-projection shift, in viewport units.
    ///
    /// To shift by pixels, divide by the viewport size.
    pub fn set_shift(&mut self, shift: DVec2) {
        self.shift = shift;
    }

    /// Diagonal of the post-projection scaling matrix: `(sx, sy, 1, 1)`.
    pub fn scaling(&self) -> DVec4 {
        DVec4::new(self.scaling.x, self.scaling.y, 1.0, 1.0)
    }

    /// Post-projection shift, as set by `set_shift`.
    pub fn shift(&self) -> DVec2 {
        self.shift
    }

    fn post_projection(&self) -> DMat4 {
        projection::post_projection(self.scaling.x, self.scaling.y, self.shift.x, self.shift.y)
    }

    /// Projection used for rendering, scaling and shift included.
    ///
    /// For perspective projections the far plane is at infinity, so this
    /// differs from what was requested through `set_projection`.
    pub fn projection_matrix(&self) -> DMat4 {
        self.post_projection() * self.projection
    }

    /// Projection used for culling (finite far plane), scaling and shift included.
    pub fn culling_projection_matrix(&self) -> DMat4 {
        self.post_projection() * self.projection_for_culling
    }

    /// Distance to the near plane
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Distance to the far plane used for culling
    pub fn culling_far(&self) -> f64 {
        self.far
    }

    /// Field of view along `direction`, in degrees.
    ///
    /// Derived from the rendering projection before scaling and shift;
    /// meaningful for symmetric perspective projections.
    pub fn field_of_view_in_degrees(&self, direction: Fov) -> f64 {
        let p = self.projection;
        let scale = match direction {
            Fov::Vertical => p.y_axis.y,
            Fov::Horizontal => p.x_axis.x,
        };
        (2.0 * (1.0 / scale).atan()).to_degrees()
    }

    /// Focal length in meters, for a 24mm tall sensor. Ignores scaling.
    pub fn focal_length(&self) -> f64 {
        (projection::SENSOR_SIZE * self.projection.y_axis.y) * 0.5
    }

    // ===== POSE =====

    /// Place the camera at `eye`, looking at `center`, with `up` as the
    /// approximate up direction.
    ///
    /// When `up` is (nearly) parallel to the view direction its components
    /// are rotated `(x, y, z) → (z, x, y)` to get a usable basis.
    ///
    /// If `eye == center`, `up` is zero, or any input is not finite, the
    /// pose is left unchanged and a warning is logged.
    pub fn look_at(&mut self, eye: DVec3, center: DVec3, up: DVec3) {
        let (Some(z_axis), Some(mut norm_up)) = ((center - eye).try_normalize(), up.try_normalize()) else {
            crate::engine_warn!("galaxy3d::Camera",
                "Degenerate look_at (eye {}, center {}, up {}), keeping previous pose", eye, center, up);
            return;
        };
        if !eye.is_finite() {
            crate::engine_warn!("galaxy3d::Camera", "Non-finite look_at eye {}, keeping previous pose", eye);
            return;
        }
        if z_axis.dot(norm_up).abs() > 0.999 {
            norm_up = DVec3::new(norm_up.z, norm_up.x, norm_up.y);
        }
        // (x, x, x) is invariant under the rotation
        let x_axis = z_axis.cross(norm_up).try_normalize()
            .unwrap_or_else(|| z_axis.any_orthonormal_vector());
        let y_axis = x_axis.cross(z_axis);

        self.set_model_matrix(DMat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            (-z_axis).extend(0.0),
            eye.extend(1.0),
        ));
    }

    /// Set the camera's world transform. Must be a rigid transform
    /// (rotation and translation only).
    pub fn set_model_matrix(&mut self, model: DMat4) {
        self.model = model;
        self.view = model.inverse();
    }

    /// Camera-to-world transform
    pub fn model_matrix(&self) -> DMat4 {
        self.model
    }

    /// World-to-camera transform, the inverse of `model_matrix()`
    pub fn view_matrix(&self) -> DMat4 {
        self.view
    }

    /// Camera position in world space
    pub fn position(&self) -> DVec3 {
        self.model.w_axis.truncate()
    }

    /// Normalized first basis vector of the model matrix (camera +X)
    pub fn left_vector(&self) -> DVec3 {
        self.model.x_axis.truncate().normalize()
    }

    /// Normalized camera up vector
    pub fn up_vector(&self) -> DVec3 {
        self.model.y_axis.truncate().normalize()
    }

    /// Normalized viewing direction (camera -Z)
    pub fn forward_vector(&self) -> DVec3 {
        -self.model.z_axis.truncate().normalize()
    }

    /// World-space frustum, from the culling projection and the view matrix
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&(self.culling_projection_matrix() * self.view))
    }

    // ===== EXPOSURE =====

    /// Set exposure from aperture (f-stops), shutter speed (s) and sensitivity (ISO).
    ///
    /// Each value is clamped independently; see `Exposure::new`.
    pub fn set_exposure(&mut self, aperture: f32, shutter_speed: f32, sensitivity: f32) {
        let exposure = Exposure::new(aperture, shutter_speed, sensitivity);
        if exposure.aperture() != aperture
            || exposure.shutter_speed() != shutter_speed
            || exposure.sensitivity() != sensitivity
        {
            crate::engine_debug!("galaxy3d::Camera",
                "Exposure clamped to f/{} {}s ISO {}",
                exposure.aperture(), exposure.shutter_speed(), exposure.sensitivity());
        }
        self.exposure = exposure;
    }

    /// Set a unit-less exposure directly (1.0 is f/1.0, 1.2s, ISO 100).
    pub fn set_exposure_value(&mut self, exposure: f32) {
        self.exposure = Exposure::from_exposure_value(exposure);
    }

    /// Current exposure settings
    pub fn exposure_settings(&self) -> Exposure {
        self.exposure
    }

    /// Aperture in f-stops
    pub fn aperture(&self) -> f32 {
        self.exposure.aperture()
    }

    /// Shutter speed in seconds
    pub fn shutter_speed(&self) -> f32 {
        self.exposure.shutter_speed()
    }

    /// Sensitivity in ISO
    pub fn sensitivity(&self) -> f32 {
        self.exposure.sensitivity()
    }

    /// Exposure value at ISO 100
    pub fn ev100(&self) -> f32 {
        self.exposure.ev100()
    }

    /// Unit-less photometric exposure
    pub fn exposure(&self) -> f32 {
        self.exposure.exposure()
    }

    /// Set the focus distance in world units. Negative values become 0.
    pub fn set_focus_distance(&mut self, distance: f32) {
        self.focus_distance = distance.max(0.0);
    }

    /// Focus distance in world units
    pub fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    // ===== COORDINATE SPACES =====

    /// Inverse of a projection matrix
    pub fn inverse_projection(projection: &DMat4) -> DMat4 {
        projection.inverse()
    }

    /// View space → clip space, through the rendering projection
    pub fn view_to_clip(&self, p: DVec4) -> DVec4 {
        self.projection_matrix() * p
    }

    /// Clip space → view space, through the inverse rendering projection
    pub fn clip_to_view(&self, p: DVec4) -> DVec4 {
        Self::inverse_projection(&self.projection_matrix()) * p
    }

    /// View space → world space position
    pub fn view_to_world(&self, p: DVec3) -> DVec3 {
        self.model.transform_point3(p)
    }

    /// World space → view space position
    pub fn world_to_view(&self, p: DVec3) -> DVec3 {
        self.view.transform_point3(p)
    }

    // ===== GPU =====

    /// Snapshot of the camera for upload, converted to f32
    pub fn uniforms(&self) -> CameraUniforms {
        let view = self.view;
        let projection = self.projection_matrix();
        CameraUniforms {
            view: view.as_mat4(),
            projection: projection.as_mat4(),
            view_projection: (projection * view).as_mat4(),
            inverse_view: self.model.as_mat4(),
            inverse_projection: projection.inverse().as_mat4(),
            position: self.position().as_vec3().extend(1.0),
            exposure_near_far: Vec4::new(
                self.exposure(),
                self.ev100(),
                self.near as f32,
                self.far as f32,
            ),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
