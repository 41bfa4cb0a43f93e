/// CameraComponent — camera behavior attached to an entity.
///
/// Holds nothing but the entity. Every call resolves the entity's camera
/// through a `CameraResolver` (usually the engine's `CameraManager`) and
/// forwards to it, converting between the f32 types used by scene code and
/// the f64 math of the camera.
///
/// A component whose entity has no camera is a programming error: the
/// forwarding methods log it and panic. Use `try_resolve` to check first.

use glam::{Mat4, Vec2, Vec3, Vec4};
use crate::entity::Entity;
use crate::error::{Error, Result};
use super::camera::{Camera, CameraUniforms};
use super::camera_manager::CameraResolver;
use super::frustum::Frustum;
use super::projection::{Fov, Projection};

/// Matrix transform (projection, view or model)
pub type Transform = Mat4;
/// Position in world or view space
pub type Position = Vec3;
/// Unit direction vector
pub type Direction = Vec3;

#[cold]
#[inline(never)]
fn unresolved(entity: Entity) -> ! {
    crate::engine_error!("galaxy3d::CameraComponent", "Entity {:?} has no camera", entity);
    panic!("galaxy3d::CameraComponent: entity {:?} has no camera", entity);
}

/// Camera component of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraComponent {
    entity: Entity,
}

impl CameraComponent {
    /// Component for `entity`. The camera itself must be created in the
    /// resolver (`CameraManager::create_camera`).
    pub fn new(entity: Entity) -> Self {
        Self { entity }
    }

    /// Entity this component belongs to
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Resolve the camera without panicking
    pub fn try_resolve<'a, R: CameraResolver + ?Sized>(&self, cameras: &'a R) -> Result<&'a Camera> {
        cameras.resolve(self.entity)
            .ok_or_else(|| Error::ComponentNotFound(format!("no camera on entity {:?}", self.entity)))
    }

    fn camera<'a, R: CameraResolver + ?Sized>(&self, cameras: &'a R) -> &'a Camera {
        match cameras.resolve(self.entity) {
            Some(camera) => camera,
            None => unresolved(self.entity),
        }
    }

    fn camera_mut<'a, R: CameraResolver + ?Sized>(&self, cameras: &'a mut R) -> &'a mut Camera {
        match cameras.resolve_mut(self.entity) {
            Some(camera) => {
                crate::engine_trace!("galaxy3d::CameraComponent", "Updating camera of entity {:?}", self.entity);
                camera
            }
            None => unresolved(self.entity),
        }
    }

    // ===== PROJECTION =====

    /// Set the projection from the six planes of the view volume.
    ///
    /// * `left`, `right`, `bottom`, `top` - extents on the near plane, world units
    /// * `near` - `> 0` for perspective
    /// * `far` - `> near` for perspective, `!= near` for ortho
    ///
    /// Invalid planes are replaced by the camera's default frustum.
    pub fn set_projection<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        projection: Projection,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) {
        self.camera_mut(cameras).set_projection(projection, left, right, bottom, top, near, far);
    }

    /// Set a perspective projection from a field of view in degrees.
    ///
    /// `aspect` is width / height; `0 < near < far`.
    pub fn set_projection_fov<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        fov_in_degrees: f64,
        aspect: f64,
        near: f64,
        far: f64,
        direction: Fov,
    ) {
        self.camera_mut(cameras).set_projection_fov(fov_in_degrees, aspect, near, far, direction);
    }

    /// Set a perspective projection from a lens focal length in millimeters.
    pub fn set_lens_projection<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        focal_length_in_millimeters: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) {
        self.camera_mut(cameras).set_lens_projection(focal_length_in_millimeters, aspect, near, far);
    }

    /// Set a custom projection, also used for culling.
    pub fn set_custom_projection<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        projection: Transform,
        near: f64,
        far: f64,
    ) {
        self.camera_mut(cameras).set_custom_projection(projection.as_dmat4(), near, far);
    }

    /// Set the post-projection scaling (x, y)
    pub fn set_scaling<R: CameraResolver + ?Sized>(&self, cameras: &mut R, scaling: Vec2) {
        self.camera_mut(cameras).set_scaling(scaling.as_dvec2());
    }

    /// Set the post-projection shift, in viewport units
    pub fn set_shift<R: CameraResolver + ?Sized>(&self, cameras: &mut R, shift: Vec2) {
        self.camera_mut(cameras).set_shift(shift.as_dvec2());
    }

    // ===== POSE =====

    /// Place the camera at `eye` looking at `center`
    pub fn look_at<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        eye: Position,
        center: Position,
        up: Direction,
    ) {
        self.camera_mut(cameras).look_at(eye.as_dvec3(), center.as_dvec3(), up.as_dvec3());
    }

    /// Set the camera's world transform (rigid: rotation and translation only)
    pub fn set_model_transform<R: CameraResolver + ?Sized>(&self, cameras: &mut R, model: Transform) {
        self.camera_mut(cameras).set_model_matrix(model.as_dmat4());
    }

    // ===== MATRICES AND VECTORS =====

    /// Rendering projection (infinite far plane when perspective)
    pub fn projection_transform<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Transform {
        self.camera(cameras).projection_matrix().as_mat4()
    }

    /// Culling projection (finite far plane)
    pub fn culling_projection_transform<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Transform {
        self.camera(cameras).culling_projection_matrix().as_mat4()
    }

    /// World-to-camera transform, the inverse of `model_transform`
    pub fn view_transform<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Transform {
        self.camera(cameras).view_matrix().as_mat4()
    }

    /// Camera-to-world transform
    pub fn model_transform<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Transform {
        self.camera(cameras).model_matrix().as_mat4()
    }

    /// Post-projection scaling diagonal `(sx, sy, 1, 1)`
    pub fn scaling<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Vec4 {
        self.camera(cameras).scaling().as_vec4()
    }

    /// Camera +X axis in world space
    pub fn left_direction<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Direction {
        self.camera(cameras).left_vector().as_vec3()
    }

    /// Camera up axis in world space
    pub fn up_direction<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Direction {
        self.camera(cameras).up_vector().as_vec3()
    }

    /// Viewing direction in world space
    pub fn forward_direction<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Direction {
        self.camera(cameras).forward_vector().as_vec3()
    }

    /// Camera position in world space
    pub fn position<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Position {
        self.camera(cameras).position().as_vec3()
    }

    /// Near plane distance
    pub fn near<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).near() as f32
    }

    /// Far plane distance used for culling
    pub fn culling_far<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).culling_far() as f32
    }

    /// Field of view in degrees
    pub fn field_of_view<R: CameraResolver + ?Sized>(&self, cameras: &R, direction: Fov) -> f32 {
        self.camera(cameras).field_of_view_in_degrees(direction) as f32
    }

    /// Focal length in meters
    pub fn focal_length<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).focal_length() as f32
    }

    /// World-space culling frustum
    pub fn frustum<R: CameraResolver + ?Sized>(&self, cameras: &R) -> Frustum {
        self.camera(cameras).frustum()
    }

    /// Uniform block for upload
    pub fn uniforms<R: CameraResolver + ?Sized>(&self, cameras: &R) -> CameraUniforms {
        self.camera(cameras).uniforms()
    }

    // ===== EXPOSURE =====

    /// Set aperture (f-stops), shutter speed (s) and sensitivity (ISO).
    ///
    /// Clamped to [0.5, 64], [1/25000, 60] and [10, 204800] respectively.
    pub fn set_exposure<R: CameraResolver + ?Sized>(
        &self,
        cameras: &mut R,
        aperture: f32,
        shutter_speed: f32,
        sensitivity: f32,
    ) {
        self.camera_mut(cameras).set_exposure(aperture, shutter_speed, sensitivity);
    }

    /// Set a unit-less exposure (1.0 is f/1.0, 1.2s, ISO 100)
    pub fn set_exposure_value<R: CameraResolver + ?Sized>(&self, cameras: &mut R, exposure: f32) {
        self.camera_mut(cameras).set_exposure_value(exposure);
    }

    /// Aperture in f-stops
    pub fn aperture<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).aperture()
    }

    /// Shutter speed in seconds
    pub fn shutter_speed<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).shutter_speed()
    }

    /// Sensitivity in ISO
    pub fn sensitivity<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).sensitivity()
    }

    /// Unit-less photometric exposure
    pub fn exposure<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).exposure()
    }

    /// Set the focus distance in world units
    pub fn set_focus_distance<R: CameraResolver + ?Sized>(&self, cameras: &mut R, distance: f32) {
        self.camera_mut(cameras).set_focus_distance(distance);
    }

    /// Focus distance in world units
    pub fn focus_distance<R: CameraResolver + ?Sized>(&self, cameras: &R) -> f32 {
        self.camera(cameras).focus_distance()
    }

    // ===== COORDINATE SPACES =====

    /// Clip space → view space
    pub fn clip_space_to_view_space<R: CameraResolver + ?Sized>(&self, cameras: &R, p: Vec4) -> Vec4 {
        self.camera(cameras).clip_to_view(p.as_dvec4()).as_vec4()
    }

    /// View space → clip space
    pub fn view_space_to_clip_space<R: CameraResolver + ?Sized>(&self, cameras: &R, p: Vec4) -> Vec4 {
        self.camera(cameras).view_to_clip(p.as_dvec4()).as_vec4()
    }

    /// View space → world space
    pub fn view_space_to_world<R: CameraResolver + ?Sized>(&self, cameras: &R, p: Position) -> Position {
        self.camera(cameras).view_to_world(p.as_dvec3()).as_vec3()
    }

    /// World space → view space, `view_transform * p`
    pub fn world_to_view_space<R: CameraResolver + ?Sized>(&self, cameras: &R, p: Position) -> Position {
        self.view_transform(cameras).transform_point3(p)
    }
}

#[cfg(test)]
#[path = "camera_component_tests.rs"]
mod tests;
