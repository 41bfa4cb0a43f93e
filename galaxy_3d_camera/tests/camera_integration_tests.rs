//! Integration tests for camera components driven through the Engine
//!
//! The camera manager lives in the Engine singleton, so every test here
//! is #[serial].
//!
//! Run with: cargo test --test camera_integration_tests

use galaxy_3d_camera::galaxy3d::{
    Engine, Error, CameraComponent, CameraConfig, EntityManager, Fov, FrustumTest, Aabb,
};
use galaxy_3d_camera::glam::{DVec3, Vec3, Vec4};
use approx::assert_relative_eq;
use serial_test::serial;

fn setup() {
    let _ = Engine::initialize();
    Engine::shutdown();
    Engine::create_camera_manager().unwrap();
}

// ============================================================================
// COMPONENT LIFECYCLE
// ============================================================================

#[test]
#[serial]
fn test_integration_camera_component_workflow() {
    setup();
    let mut entities = EntityManager::new();
    let entity = entities.create();

    let manager = Engine::camera_manager().unwrap();
    let mut cameras = manager.lock().unwrap();
    cameras.create_camera(entity).unwrap();

    let camera = CameraComponent::new(entity);
    camera.set_projection_fov(&mut *cameras, 60.0, 16.0 / 9.0, 0.1, 1000.0, Fov::Vertical);
    camera.look_at(&mut *cameras, Vec3::new(0.0, 2.0, 10.0), Vec3::ZERO, Vec3::Y);

    assert_relative_eq!(camera.field_of_view(&*cameras, Fov::Vertical), 60.0, epsilon = 1e-3);
    assert_relative_eq!(camera.culling_far(&*cameras), 1000.0);
    let forward = camera.forward_direction(&*cameras);
    let expected = Vec3::new(0.0, -2.0, -10.0).normalize();
    assert_relative_eq!(forward.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(forward.y, expected.y, epsilon = 1e-5);
    assert_relative_eq!(forward.z, expected.z, epsilon = 1e-5);

    drop(cameras);
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_configured_camera() {
    setup();
    let mut entities = EntityManager::new();
    let entity = entities.create();
    let config = CameraConfig {
        aperture: 1.4,
        shutter_speed: 1.0 / 30.0,
        sensitivity: 1600.0,
        ..CameraConfig::default()
    };

    let manager = Engine::camera_manager().unwrap();
    let mut cameras = manager.lock().unwrap();
    cameras.create_camera_with_config(entity, &config).unwrap();
    let camera = CameraComponent::new(entity);

    assert_eq!(camera.aperture(&*cameras), 1.4);
    assert_eq!(camera.sensitivity(&*cameras), 1600.0);
    let ev100 = (1.4f32 * 1.4 / (1.0 / 30.0) * 100.0 / 1600.0).log2();
    assert_relative_eq!(camera.exposure(&*cameras), 1.0 / (1.2 * ev100.exp2()), epsilon = 1e-5);

    drop(cameras);
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_destroyed_camera_no_longer_resolves() {
    setup();
    let mut entities = EntityManager::new();
    let entity = entities.create();
    let camera = CameraComponent::new(entity);

    let manager = Engine::camera_manager().unwrap();
    let mut cameras = manager.lock().unwrap();
    cameras.create_camera(entity).unwrap();
    assert!(camera.try_resolve(&*cameras).is_ok());

    cameras.destroy_camera(entity);
    assert!(matches!(camera.try_resolve(&*cameras), Err(Error::ComponentNotFound(_))));

    drop(cameras);
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_camera_manager_requires_creation() {
    let _ = Engine::initialize();
    Engine::shutdown();

    assert!(matches!(Engine::camera_manager(), Err(Error::InitializationFailed(_))));
    Engine::reset_logger();
}

// ============================================================================
// CULLING AND COORDINATE SPACES
// ============================================================================

#[test]
#[serial]
fn test_integration_frustum_culling() {
    setup();
    let mut entities = EntityManager::new();
    let entity = entities.create();

    let manager = Engine::camera_manager().unwrap();
    let mut cameras = manager.lock().unwrap();
    cameras.create_camera(entity).unwrap();
    let camera = CameraComponent::new(entity);
    camera.set_projection_fov(&mut *cameras, 90.0, 1.0, 0.1, 50.0, Fov::Vertical);
    camera.look_at(&mut *cameras, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

    let frustum = camera.frustum(&*cameras);
    let ahead = Aabb::from_center_half_extent(DVec3::new(0.0, 0.0, -10.0), DVec3::splat(1.0));
    let behind = Aabb::from_center_half_extent(DVec3::new(0.0, 0.0, 10.0), DVec3::splat(1.0));
    let beyond_far = Aabb::from_center_half_extent(DVec3::new(0.0, 0.0, -80.0), DVec3::splat(1.0));

    assert_eq!(frustum.classify_aabb(&ahead), FrustumTest::Inside);
    assert_eq!(frustum.classify_aabb(&behind), FrustumTest::Outside);
    assert_eq!(frustum.classify_aabb(&beyond_far), FrustumTest::Outside);

    drop(cameras);
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_world_point_projects_to_ndc_center() {
    setup();
    let mut entities = EntityManager::new();
    let entity = entities.create();

    let manager = Engine::camera_manager().unwrap();
    let mut cameras = manager.lock().unwrap();
    cameras.create_camera(entity).unwrap();
    let camera = CameraComponent::new(entity);
    let target = Vec3::new(5.0, 1.0, -3.0);
    camera.look_at(&mut *cameras, Vec3::new(1.0, 1.0, 0.0), target, Vec3::Y);

    let view = camera.world_to_view_space(&*cameras, target);
    let clip = camera.view_space_to_clip_space(&*cameras, view.extend(1.0));
    let ndc = clip / clip.w;

    assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
    assert!(view.z < 0.0);

    let back = camera.clip_space_to_view_space(&*cameras, clip);
    assert!(back.abs_diff_eq(Vec4::new(view.x, view.y, view.z, 1.0), 1e-3));

    drop(cameras);
    Engine::shutdown();
}
