use crate::camera::CameraBasis;
use crate::cube::hits_unit_cube;
use crate::error::{RenderError, Result};
use crate::framebuffer::{pack_argb, FrameBuffer, PixelBuffer};
use crate::math::{Ray, Vec3};
use log::debug;
use rayon::prelude::*;
use std::time::Instant;
use voxel_model::CameraParams;

pub const HIT_COLOR: [u8; 4] = [255, 255, 255, 255];
pub const MISS_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Paints every pixel of `frame` white where its ray meets the unit cube and
/// black elsewhere. A degenerate camera fails before any pixel is written.
pub fn render<F>(params: &CameraParams, frame: &mut F) -> Result<()>
where
    F: FrameBuffer + ?Sized,
{
    let basis = CameraBasis::from_params(params, frame.width(), frame.height())?;
    render_basis(&basis, frame);
    Ok(())
}

/// Sequential pixel loop over a prepared basis. Points advance by `dx`
/// along a row and row starts by `dy`.
pub fn render_basis<F>(basis: &CameraBasis, frame: &mut F)
where
    F: FrameBuffer + ?Sized,
{
    let start = Instant::now();
    let (width, height) = (frame.width(), frame.height());

    let mut base_row = basis.base;
    for y in 0..height {
        let mut point = base_row;
        for x in 0..width {
            let [r, g, b, a] = shade(&Ray::new(basis.origin, point));
            frame.set(x, y, r, g, b, a);
            point += basis.dx;
        }
        base_row += basis.dy;
    }

    debug!(
        "render: {}x{} in {:.2}ms",
        width,
        height,
        start.elapsed().as_secs_f64() * 1e3
    );
}

/// Row-parallel variant of [`render`] for the contiguous buffer.
///
/// `threads == 0` uses the global rayon pool. Output is bit-identical to
/// [`render`] because row starts are accumulated the same way.
pub fn render_parallel(
    params: &CameraParams,
    buffer: &mut PixelBuffer,
    threads: usize,
) -> Result<()> {
    let (width, height, stride) = (buffer.width(), buffer.height(), buffer.stride());
    let basis = CameraBasis::from_params(params, width, height)?;
    let row_starts = row_starts(&basis, height);
    let start = Instant::now();

    with_thread_pool(threads, || {
        buffer
            .as_mut_slice()
            .par_chunks_mut(stride)
            .zip(row_starts.par_iter())
            .for_each(|(row, &base_row)| {
                let mut point = base_row;
                for pixel in &mut row[..width as usize] {
                    let [r, g, b, a] = shade(&Ray::new(basis.origin, point));
                    *pixel = pack_argb(r, g, b, a);
                    point += basis.dx;
                }
            });
    })?;

    debug!(
        "render_parallel: {}x{} threads={} in {:.2}ms",
        width,
        height,
        threads,
        start.elapsed().as_secs_f64() * 1e3
    );
    Ok(())
}

fn shade(ray: &Ray) -> [u8; 4] {
    if hits_unit_cube(ray) {
        HIT_COLOR
    } else {
        MISS_COLOR
    }
}

fn row_starts(basis: &CameraBasis, height: u32) -> Vec<Vec3> {
    let mut starts = Vec::with_capacity(height as usize);
    let mut base_row = basis.base;
    for _ in 0..height {
        starts.push(base_row);
        base_row += basis.dy;
    }
    starts
}

fn with_thread_pool<T: Send>(threads: usize, f: impl FnOnce() -> T + Send) -> Result<T> {
    if threads == 0 {
        Ok(f())
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| RenderError::ThreadPool(err.to_string()))?;
        Ok(pool.install(f))
    }
}
