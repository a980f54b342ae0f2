//! Shared data structures for the voxel renderer.

use serde::{Deserialize, Serialize};

/// Camera placement as read from a camera file or built from CLI defaults.
///
/// `up` only needs to be non-parallel to the view direction; it is
/// orthogonalized against it when the pixel basis is built. Rows of the
/// image advance along `up`, so `(0, -1, 0)` puts world `+y` at the top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraParams {
    pub origin: [f64; 3],
    pub target: [f64; 3],
    pub up: [f64; 3],
    /// World units per pixel at unit distance along the view direction.
    pub pixel_pitch: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, -50.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, -1.0, 0.0],
            pixel_pitch: 30.0 / 50.0 / 1980.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraFile {
    pub version: u32,
    pub camera: CameraParams,
}

impl Default for CameraFile {
    fn default() -> Self {
        Self {
            version: 1,
            camera: CameraParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_file_round_trip_is_stable() {
        let file = CameraFile {
            version: 1,
            camera: CameraParams {
                origin: [1.0, 2.0, -30.0],
                target: [0.0, 0.5, 0.0],
                up: [0.0, -1.0, 0.25],
                pixel_pitch: 0.001,
            },
        };

        let json = serde_json::to_string_pretty(&file).unwrap();
        let parsed: CameraFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn default_camera_file_parses_back() {
        let file = CameraFile::default();
        assert_eq!(file.version, 1);
        assert_eq!(file.camera, CameraParams::default());

        let json = serde_json::to_string(&file).unwrap();
        let parsed: CameraFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn default_camera_looks_down_positive_z() {
        let camera = CameraParams::default();
        assert_eq!(camera.origin, [0.0, 0.0, -50.0]);
        assert_eq!(camera.target, [0.0, 0.0, 0.0]);
        assert!((camera.pixel_pitch * 50.0 * 1980.0 - 30.0).abs() < 1e-9);
    }
}
