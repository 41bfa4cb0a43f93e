/// Projection — matrix construction and lens math.
///
/// All matrices follow the OpenGL clip-space convention: right-handed view
/// space looking down -Z, NDC in [-1, 1] on every axis. Computations are done
/// in f64; the rendering projection of a perspective camera puts the far
/// plane at infinity, the culling projection keeps it finite.

use glam::{DMat4, DVec4};

/// Height of the simulated sensor in meters (35mm full frame).
pub const SENSOR_SIZE: f64 = 0.024;

/// Frustum substituted when projection parameters are invalid.
pub const DEFAULT_PROJECTION_PARAMS: ProjectionParams = ProjectionParams {
    left: -0.1,
    right: 0.1,
    bottom: -0.1,
    top: 0.1,
    near: 0.1,
    far: 100.0,
};

/// Projection type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Perspective projection, objects get smaller as they are farther
    Perspective,
    /// Orthonormal projection, preserves distances
    Ortho,
}

/// Axis the field of view is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fov {
    /// The field of view is measured vertically
    #[default]
    Vertical,
    /// The field of view is measured horizontally
    Horizontal,
}

/// Six-plane description of a projection, in view-space units.
///
/// `left`/`right`/`bottom`/`top` are measured on the near plane.
/// `near` and `far` are distances along -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl ProjectionParams {
    /// Whether the parameters describe a usable projection.
    ///
    /// Invalid when `left == right`, `bottom == top`, or
    /// - perspective: `near <= 0` or `far <= near`
    /// - ortho: `near == far`
    pub fn is_valid(&self, projection: Projection) -> bool {
        if self.left == self.right || self.bottom == self.top {
            return false;
        }
        match projection {
            Projection::Perspective => !(self.near <= 0.0 || self.far <= self.near),
            Projection::Ortho => self.near != self.far,
        }
    }

    /// Apply the correction policy: invalid parameters are replaced as a
    /// whole by `DEFAULT_PROJECTION_PARAMS`. Returns the parameters to use
    /// and whether a substitution happened.
    pub fn validated(self, projection: Projection) -> (ProjectionParams, bool) {
        if self.is_valid(projection) {
            (self, false)
        } else {
            (DEFAULT_PROJECTION_PARAMS, true)
        }
    }

    /// Symmetric perspective frustum from a field of view in degrees.
    ///
    /// With `Fov::Vertical` the half height on the near plane is
    /// `tan(fov / 2) * near` and the half width is `half_height * aspect`;
    /// with `Fov::Horizontal` the roles are swapped.
    pub fn from_fov(fov_in_degrees: f64, aspect: f64, near: f64, far: f64, direction: Fov) -> Self {
        let s = (fov_in_degrees.to_radians() * 0.5).tan() * near;
        let (w, h) = match direction {
            Fov::Vertical => (s * aspect, s),
            Fov::Horizontal => (s, s / aspect),
        };
        Self { left: -w, right: w, bottom: -h, top: h, near, far }
    }

    /// Symmetric perspective frustum from a lens focal length in millimeters.
    pub fn from_lens(focal_length_in_millimeters: f64, aspect: f64, near: f64, far: f64) -> Self {
        let h = (0.5 * near) * ((SENSOR_SIZE * 1000.0) / focal_length_in_millimeters);
        Self { left: -aspect * h, right: aspect * h, bottom: -h, top: h, near, far }
    }
}

/// Perspective frustum matrix with a finite far plane.
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4 {
    let rl = right - left;
    let tb = top - bottom;
    let f_n = far - near;
    DMat4::from_cols(
        DVec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
        DVec4::new((right + left) / rl, (top + bottom) / tb, -(far + near) / f_n, -1.0),
        DVec4::new(0.0, 0.0, -2.0 * far * near / f_n, 0.0),
    )
}

/// Perspective frustum matrix with the far plane at infinity.
///
/// This is the limit of `frustum()` as `far` goes to infinity.
pub fn frustum_infinite(left: f64, right: f64, bottom: f64, top: f64, near: f64) -> DMat4 {
    let rl = right - left;
    let tb = top - bottom;
    DMat4::from_cols(
        DVec4::new(2.0 * near / rl, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near / tb, 0.0, 0.0),
        DVec4::new((right + left) / rl, (top + bottom) / tb, -1.0, -1.0),
        DVec4::new(0.0, 0.0, -2.0 * near, 0.0),
    )
}

/// Orthographic projection matrix.
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4 {
    let rl = right - left;
    let tb = top - bottom;
    let f_n = far - near;
    DMat4::from_cols(
        DVec4::new(2.0 / rl, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 / tb, 0.0, 0.0),
        DVec4::new(0.0, 0.0, -2.0 / f_n, 0.0),
        DVec4::new(-(right + left) / rl, -(top + bottom) / tb, -(far + near) / f_n, 1.0),
    )
}

/// Build the `(rendering, culling)` matrix pair for validated parameters.
pub fn build(projection: Projection, p: &ProjectionParams) -> (DMat4, DMat4) {
    match projection {
        Projection::Perspective => (
            frustum_infinite(p.left, p.right, p.bottom, p.top, p.near),
            frustum(p.left, p.right, p.bottom, p.top, p.near, p.far),
        ),
        Projection::Ortho => {
            let m = ortho(p.left, p.right, p.bottom, p.top, p.near, p.far);
            (m, m)
        }
    }
}

/// Post-projection matrix applying a per-axis scaling and an NDC shift.
///
/// `shift` is expressed in viewport units: a shift of 0.5 moves the image
/// by one NDC unit. Applied as `post_projection(..) * projection`.
pub fn post_projection(scaling_x: f64, scaling_y: f64, shift_x: f64, shift_y: f64) -> DMat4 {
    DMat4::from_cols(
        DVec4::new(scaling_x, 0.0, 0.0, 0.0),
        DVec4::new(0.0, scaling_y, 0.0, 0.0),
        DVec4::new(0.0, 0.0, 1.0, 0.0),
        DVec4::new(2.0 * shift_x, 2.0 * shift_y, 0.0, 1.0),
    )
}

/// Effective focal length of a lens focused at `focus_distance`.
///
/// Both values in the same unit. `focus_distance` is clamped so it is never
/// closer than the focal length; when they are equal the result is infinite.
pub fn effective_focal_length(focal_length: f64, focus_distance: f64) -> f64 {
    let focus_distance = focus_distance.max(focal_length);
    (focus_distance * focal_length) / (focus_distance - focal_length)
}

/// Effective vertical field of view, in degrees, of a lens with the given
/// field of view when focused at `focus_distance` meters.
pub fn effective_fov(fov_in_degrees: f64, focus_distance: f64) -> f64 {
    let f = 0.5 * SENSOR_SIZE / (fov_in_degrees.to_radians() * 0.5).tan();
    let focus_distance = focus_distance.max(f);
    let fov = 2.0 * (SENSOR_SIZE * (1.0 - f / focus_distance) / (2.0 * f)).atan();
    fov.to_degrees()
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
