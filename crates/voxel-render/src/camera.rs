use crate::error::{RenderError, Result};
use crate::math::{Ray, Vec3};
use voxel_model::CameraParams;

/// Per-pixel stepping basis for one render.
///
/// `dz` is the unit view direction, `dy` the row step (along the camera's
/// `up`) and `dx = dy x dz` the column step, both `pixel_pitch` long.
/// `base` is the point of pixel (0, 0) on the image plane one unit in front
/// of `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub origin: Vec3,
    pub dx: Vec3,
    pub dy: Vec3,
    pub dz: Vec3,
    pub base: Vec3,
}

impl CameraBasis {
    pub fn new(
        origin: Vec3,
        target: Vec3,
        up: Vec3,
        pixel_pitch: f64,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if !(pixel_pitch > 0.0 && pixel_pitch.is_finite()) {
            return Err(RenderError::DegenerateCamera("pixel pitch must be positive"));
        }

        let dz = (target - origin)
            .normalize()
            .map_err(|_| RenderError::DegenerateCamera("target coincides with origin"))?;

        let dy = up
            .orthogonalize(dz)?
            .normalize_to_length(pixel_pitch)
            .map_err(|_| RenderError::DegenerateCamera("up is parallel to the view direction"))?;

        let dx = dy.cross(dz);

        let half_w = (f64::from(width) - 1.0) * 0.5;
        let half_h = (f64::from(height) - 1.0) * 0.5;
        let base = (origin + dz).sub_scaled(dx, half_w).sub_scaled(dy, half_h);

        Ok(Self {
            origin,
            dx,
            dy,
            dz,
            base,
        })
    }

    pub fn from_params(params: &CameraParams, width: u32, height: u32) -> Result<Self> {
        Self::new(
            Vec3::from_array(params.origin),
            Vec3::from_array(params.target),
            Vec3::from_array(params.up),
            params.pixel_pitch,
            width,
            height,
        )
    }

    /// Image-plane point of pixel `(x, y)`, computed directly.
    pub fn pixel_point(&self, x: u32, y: u32) -> Vec3 {
        self.base
            .add_scaled(self.dx, f64::from(x))
            .add_scaled(self.dy, f64::from(y))
    }

    pub fn ray(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.origin, self.pixel_point(x, y))
    }
}
