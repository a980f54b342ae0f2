use crate::framebuffer::{FrameBuffer, PixelBuffer};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ImageError, Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Drops alpha and stride padding.
pub fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let [r, g, b, _] = buffer.rgba(x, y);
        Rgb([r, g, b])
    })
}

/// Format follows the extension. `.ppm` and `.pnm` always write binary P6;
/// the encoder's default for RGB would be P7.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<(), ImageError> {
    let is_pnm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm") || ext.eq_ignore_ascii_case("pnm"));
    if !is_pnm {
        return image.save(path);
    }

    let mut writer = BufWriter::new(File::create(path)?);
    let encoder =
        PnmEncoder::new(&mut writer).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    image.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}

/// White frame with a red rectangle over rows `100..height-50` and
/// columns `200..width-100`.
pub fn paint_test_pattern<F>(frame: &mut F)
where
    F: FrameBuffer + ?Sized,
{
    let (width, height) = (frame.width(), frame.height());
    for y in 0..height {
        for x in 0..width {
            frame.set(x, y, 255, 255, 255, 255);
        }
    }

    let rows = 100..height.saturating_sub(50);
    let cols = 200..width.saturating_sub(100);
    for y in rows {
        for x in cols.clone() {
            frame.set(x, y, 255, 0, 0, 255);
        }
    }
}
