/*!
# Galaxy 3D Camera

Camera component for the Galaxy 3D engine.

Cameras are attached to entities. Each one owns a projection (perspective or
orthographic, rendered with an infinite far plane and culled with a finite
one), a rigid pose, and a physically based exposure (aperture, shutter speed,
sensitivity).

## Architecture

- **Camera**: projection, pose and exposure math (f64)
- **CameraManager**: one camera per entity, registered in the `Engine`
- **CameraComponent**: entity handle forwarding to its camera (f32 surface)
- **Frustum**: world-space culling planes derived from a camera
- **EntityManager**: entity allocation with generational keys
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod entity;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Entities
    pub use crate::entity::{Entity, EntityManager};

    // Camera types
    pub use crate::camera::{
        Camera, CameraUniforms, CameraComponent, CameraConfig, CameraManager, CameraResolver,
        Projection, Fov, ProjectionParams, Exposure,
        Frustum, FrustumTest, Aabb,
        Transform, Position, Direction,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }
}

// Re-export math library at crate root
pub use glam;
