use anyhow::{anyhow, Result};
use log::{debug, info};
use minifb::{Key, MouseButton, Window, WindowOptions};
use voxel_model::CameraParams;
use voxel_render::{render_parallel, FrameBuffer, PixelBuffer};

/// Shows the cube until the window closes or Escape is pressed.
///
/// The frame is rebuilt whenever the window size changes and on a right
/// click; otherwise the last frame is presented as is.
pub fn run_viewer(camera: &CameraParams, width: u32, height: u32) -> Result<()> {
    let mut window = Window::new(
        "Voxel",
        width as usize,
        height as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|err| anyhow!("failed to open window: {err}"))?;
    window.set_target_fps(60);
    info!("viewer: right click repaints, Escape quits");

    let mut frame: Option<PixelBuffer> = None;
    let mut right_was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (w, h) = window.get_size();
        let right_down = window.get_mouse_down(MouseButton::Right);
        let clicked = right_down && !right_was_down;
        right_was_down = right_down;

        let resized = frame
            .as_ref()
            .map_or(true, |f| (f.width() as usize, f.height() as usize) != (w, h));

        if (resized || clicked) && w > 0 && h > 0 {
            let mut next = PixelBuffer::new(w as u32, h as u32)?;
            render_parallel(camera, &mut next, 0)?;
            debug!("viewer: repainted {}x{}", w, h);
            frame = Some(next);
        }

        match &frame {
            Some(f) => window
                .update_with_buffer(f.as_slice(), f.width() as usize, f.height() as usize)
                .map_err(|err| anyhow!("failed to present frame: {err}"))?,
            None => window.update(),
        }
    }

    Ok(())
}
