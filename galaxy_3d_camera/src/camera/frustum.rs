/// Frustum — six clipping planes for visibility testing.
///
/// Each plane is a DVec4 (A, B, C, D):
/// - (A, B, C) is the unit inward-pointing normal
/// - D is the signed distance
/// - A point P is inside if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Built by `Camera::frustum()` from the culling projection (finite far
/// plane) and the view matrix, so everything here is in world space.

use glam::{DMat4, DVec3, DVec4};

/// Result of a 3-way frustum/box classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Box is entirely outside the frustum
    Outside,
    /// Box is entirely inside the frustum
    Inside,
    /// Box partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Aabb {
    /// Box from its center and half extents
    pub fn from_center_half_extent(center: DVec3, half_extent: DVec3) -> Self {
        Self { min: center - half_extent, max: center + half_extent }
    }

    /// Corner most in the direction of `normal`
    fn positive_vertex(&self, normal: DVec3) -> DVec3 {
        DVec3::new(
            if normal.x >= 0.0 { self.max.x } else { self.min.x },
            if normal.y >= 0.0 { self.max.y } else { self.min.y },
            if normal.z >= 0.0 { self.max.z } else { self.min.z },
        )
    }

    /// Corner least in the direction of `normal`
    fn negative_vertex(&self, normal: DVec3) -> DVec3 {
        DVec3::new(
            if normal.x >= 0.0 { self.min.x } else { self.max.x },
            if normal.y >= 0.0 { self.min.y } else { self.max.y },
            if normal.z >= 0.0 { self.min.z } else { self.max.z },
        )
    }
}

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann, for OpenGL clip space (-w <= z <= w).
    pub fn from_view_projection(vp: &DMat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from a plane to a point (positive inside).
    fn distance(&self, plane: usize, point: DVec3) -> f64 {
        let p = self.planes[plane];
        p.truncate().dot(point) + p.w
    }

    /// Whether a point lies inside (or on) every plane.
    pub fn contains_point(&self, point: DVec3) -> bool {
        (0..6).all(|i| self.distance(i, point) >= 0.0)
    }

    /// Whether a sphere intersects the frustum (conservative near corners).
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        (0..6).all(|i| self.distance(i, center) >= -radius)
    }

    /// Test if a box intersects this frustum.
    ///
    /// Uses the positive vertex test. May return false positives,
    /// never false negatives.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(aabb.positive_vertex(normal)) + plane.w >= 0.0
        })
    }

    /// Classify a box against the frustum.
    ///
    /// - p-vertex outside any plane → `Outside`
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &Aabb) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(aabb.positive_vertex(normal)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }
            if normal.dot(aabb.negative_vertex(normal)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
