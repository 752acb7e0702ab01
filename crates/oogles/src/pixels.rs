//! Pixel storage modes and framebuffer reads.

use std::ffi::c_void;

use gl::types::GLint;
use oogles_core::consts as c;
use oogles_core::{Alignment, Error, GlEnum, PixelFormat, PixelStoreParameter, PixelType, Result};

use crate::context::Context;

/// Bytes an image occupies in client memory: every row but the last padded
/// to `alignment`.
pub(crate) fn image_len(
    width: i32,
    height: i32,
    bytes_per_pixel: usize,
    alignment: GLint,
) -> usize {
    if width <= 0 || height <= 0 {
        return 0;
    }
    let alignment = alignment.max(1) as usize;
    let row = width as usize * bytes_per_pixel;
    let padded = row.div_ceil(alignment) * alignment;
    padded * (height as usize - 1) + row
}

pub(crate) fn check_image_len(
    width: i32,
    height: i32,
    bytes_per_pixel: usize,
    alignment: GLint,
    actual: usize,
) -> Result<()> {
    let needed = image_len(width, height, bytes_per_pixel, alignment);
    if actual < needed {
        return Err(Error::BufferTooSmall { needed, actual });
    }
    Ok(())
}

impl Context {
    pub fn pixel_store(&self, pname: PixelStoreParameter, alignment: Alignment) {
        self.gl(|gl| unsafe { gl.PixelStorei(pname.to_gl(), alignment.to_gl() as GLint) });
    }

    /// Read a block of the bound framebuffer into `out`, rows padded to the
    /// pack alignment.
    pub fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        out: &mut [u8],
    ) -> Result<()> {
        let alignment = self.get_integer(c::PACK_ALIGNMENT);
        check_image_len(width, height, ty.bytes_per_pixel(format), alignment, out.len())?;
        self.gl(|gl| unsafe {
            gl.ReadPixels(
                x,
                y,
                width,
                height,
                format.to_gl(),
                ty.to_gl(),
                out.as_mut_ptr() as *mut c_void,
            )
        });
        Ok(())
    }

    /// The format/type pair besides `RGBA`/`UNSIGNED_BYTE` that
    /// [`Context::read_pixels`] accepts for the bound framebuffer.
    pub fn implementation_read_format(&self) -> Result<(PixelFormat, PixelType)> {
        let format = self.get_integer(c::IMPLEMENTATION_COLOR_READ_FORMAT) as u32;
        let ty = self.get_integer(c::IMPLEMENTATION_COLOR_READ_TYPE) as u32;
        Ok((PixelFormat::try_from_gl(format)?, PixelType::try_from_gl(ty)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;

    #[test]
    fn rows_pad_to_alignment_except_the_last() {
        assert_eq!(image_len(3, 2, 3, 4), 12 + 9);
        assert_eq!(image_len(3, 2, 3, 1), 18);
        assert_eq!(image_len(4, 4, 4, 8), 64);
        assert_eq!(image_len(0, 4, 4, 4), 0);
    }

    #[test]
    fn pixel_store_forwards_alignment() {
        let (ctx, driver) = mock_context();
        ctx.pixel_store(PixelStoreParameter::PackAlignment, Alignment::One);

        assert_eq!(driver.calls_to("PixelStorei"), vec!["PixelStorei(0x0d05, 1)"]);
    }

    #[test]
    fn read_pixels_fills_the_buffer() {
        let (ctx, driver) = mock_context();
        ctx.pixel_store(PixelStoreParameter::PackAlignment, Alignment::One);
        let mut out = [0u8; 2 * 2 * 3];

        ctx.read_pixels(0, 0, 2, 2, PixelFormat::Rgb, PixelType::UnsignedByte, &mut out)
            .unwrap();

        assert_eq!(out[5], 5);
        assert_eq!(
            driver.calls_to("ReadPixels"),
            vec!["ReadPixels(0, 0, 2, 2, 0x1907, 0x1401)"]
        );
    }

    #[test]
    fn read_pixels_rejects_short_buffers() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::PACK_ALIGNMENT, &[4]);
        let mut out = [0u8; 4];

        let result =
            ctx.read_pixels(0, 0, 2, 1, PixelFormat::Rgba, PixelType::UnsignedByte, &mut out);

        assert!(matches!(result, Err(Error::BufferTooSmall { needed: 8, actual: 4 })));
        assert!(driver.calls_to("ReadPixels").is_empty());
    }

    #[test]
    fn read_format_is_typed() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::IMPLEMENTATION_COLOR_READ_FORMAT, &[c::RGB as GLint]);
        driver.set_integer(
            c::IMPLEMENTATION_COLOR_READ_TYPE,
            &[c::UNSIGNED_SHORT_5_6_5 as GLint],
        );

        assert_eq!(
            ctx.implementation_read_format().unwrap(),
            (PixelFormat::Rgb, PixelType::UnsignedShort565)
        );
    }
}
