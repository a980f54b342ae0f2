//! Orthographic unit-cube ray caster and image output.

pub mod camera;
pub mod cube;
pub mod error;
pub mod framebuffer;
pub mod image_out;
pub mod interval;
pub mod math;
pub mod raster;

pub use camera::CameraBasis;
pub use error::{RenderError, Result};
pub use framebuffer::{FrameBuffer, PixelBuffer};
pub use image_out::{paint_test_pattern, to_rgb_image, write_image};
pub use raster::{render, render_basis, render_parallel};
