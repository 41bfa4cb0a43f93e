//! Camera module — projection, pose, exposure and the entity component.
//!
//! `Camera` holds the math. `CameraManager` stores one camera per entity and
//! `CameraComponent` is the handle scene code uses to drive it.

pub mod projection;
pub mod exposure;
mod frustum;
mod camera;
mod camera_manager;
mod camera_component;

pub use projection::{
    Projection, Fov, ProjectionParams,
    SENSOR_SIZE, DEFAULT_PROJECTION_PARAMS,
    effective_focal_length, effective_fov,
};
pub use exposure::Exposure;
pub use frustum::{
    Aabb, Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use camera::{Camera, CameraUniforms};
pub use camera_manager::{CameraConfig, CameraManager, CameraResolver};
pub use camera_component::{CameraComponent, Direction, Position, Transform};
