//! 2D and cube-map textures.

use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLsizei, GLuint};
use oogles_core::consts as c;
use oogles_core::{
    GlEnum, Gles2, ObjectKind, PixelFormat, PixelType, Result, TextureImageTarget,
    TextureMagFilter, TextureMinFilter, TextureParameter, TextureTarget, TextureUnit, TextureWrap,
};
use tracing::trace;

use crate::bytes::{as_bytes, Plain};
use crate::context::{Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;

pub(crate) enum TextureKind {}

impl Kind for TextureKind {
    const KIND: ObjectKind = ObjectKind::Texture;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.textures
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteTextures(1, &handle);
    }
}

object_wrapper! {
    /// A texture object. Its target is fixed by the first bind.
    Texture, TextureKind
}

impl Texture {
    pub fn new(ctx: &Context) -> Result<Self> {
        let mut handle = 0;
        ctx.gl(|gl| unsafe { gl.GenTextures(1, &mut handle) });
        Object::register(ctx, handle).map(Texture)
    }

    /// Bind to `target` on the active texture unit.
    pub fn bind(&self, target: TextureTarget) {
        trace!("bind texture {} to {target:?}", self.handle());
        self.context()
            .gl(|gl| unsafe { gl.BindTexture(target.to_gl(), self.handle()) });
    }

    /// False until the object is first bound.
    pub fn is_texture(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsTexture(self.handle()) })
            != c::FALSE
    }
}

impl Context {
    pub fn active_texture(&self, unit: TextureUnit) {
        self.gl(|gl| unsafe { gl.ActiveTexture(unit.to_gl()) });
    }

    pub fn active_texture_unit(&self) -> TextureUnit {
        let value = self.get_integer(c::ACTIVE_TEXTURE) as GLenum;
        TextureUnit::from_gl(value).unwrap_or(TextureUnit(0))
    }

    pub fn unbind_texture(&self, target: TextureTarget) {
        trace!("unbind {target:?}");
        self.gl(|gl| unsafe { gl.BindTexture(target.to_gl(), 0) });
    }

    /// The texture bound to `target` on the active unit, if it was created
    /// through this context.
    pub fn bound_texture(&self, target: TextureTarget) -> Option<Texture> {
        let handle = self.get_integer(target.binding()) as GLuint;
        Texture::lookup(self, handle)
    }

    /// Specify a level of the texture bound to `target`'s binding point.
    ///
    /// Fails with [`oogles_core::Error::BufferTooSmall`] when `pixels` is
    /// shorter than the image, rows padded to the unpack alignment.
    pub fn tex_image_2d<T: Plain>(
        &self,
        target: TextureImageTarget,
        level: i32,
        format: PixelFormat,
        width: i32,
        height: i32,
        ty: PixelType,
        pixels: &[T],
    ) -> Result<()> {
        let bytes = as_bytes(pixels);
        self.check_unpack_len(width, height, format, ty, bytes.len())?;
        self.gl(|gl| unsafe {
            gl.TexImage2D(
                target.to_gl(),
                level,
                format.to_gl() as GLint,
                width,
                height,
                0,
                format.to_gl(),
                ty.to_gl(),
                bytes.as_ptr() as *const c_void,
            )
        });
        Ok(())
    }

    /// Allocate a level without uploading data.
    pub fn tex_image_2d_empty(
        &self,
        target: TextureImageTarget,
        level: i32,
        format: PixelFormat,
        width: i32,
        height: i32,
        ty: PixelType,
    ) {
        self.gl(|gl| unsafe {
            gl.TexImage2D(
                target.to_gl(),
                level,
                format.to_gl() as GLint,
                width,
                height,
                0,
                format.to_gl(),
                ty.to_gl(),
                std::ptr::null(),
            )
        });
    }

    pub fn tex_sub_image_2d<T: Plain>(
        &self,
        target: TextureImageTarget,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        pixels: &[T],
    ) -> Result<()> {
        let bytes = as_bytes(pixels);
        self.check_unpack_len(width, height, format, ty, bytes.len())?;
        self.gl(|gl| unsafe {
            gl.TexSubImage2D(
                target.to_gl(),
                level,
                x,
                y,
                width,
                height,
                format.to_gl(),
                ty.to_gl(),
                bytes.as_ptr() as *const c_void,
            )
        });
        Ok(())
    }

    /// Compressed formats come from extensions, so `format` is a raw token;
    /// see [`Context::compressed_texture_formats`].
    pub fn compressed_tex_image_2d(
        &self,
        target: TextureImageTarget,
        level: i32,
        format: GLenum,
        width: i32,
        height: i32,
        data: &[u8],
    ) {
        self.gl(|gl| unsafe {
            gl.CompressedTexImage2D(
                target.to_gl(),
                level,
                format,
                width,
                height,
                0,
                data.len() as GLsizei,
                data.as_ptr() as *const c_void,
            )
        });
    }

    pub fn compressed_tex_sub_image_2d(
        &self,
        target: TextureImageTarget,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: GLenum,
        data: &[u8],
    ) {
        self.gl(|gl| unsafe {
            gl.CompressedTexSubImage2D(
                target.to_gl(),
                level,
                x,
                y,
                width,
                height,
                format,
                data.len() as GLsizei,
                data.as_ptr() as *const c_void,
            )
        });
    }

    /// Specify a level from the bound framebuffer's color buffer.
    pub fn copy_tex_image_2d(
        &self,
        target: TextureImageTarget,
        level: i32,
        format: PixelFormat,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        self.gl(|gl| unsafe {
            gl.CopyTexImage2D(target.to_gl(), level, format.to_gl(), x, y, width, height, 0)
        });
    }

    pub fn copy_tex_sub_image_2d(
        &self,
        target: TextureImageTarget,
        level: i32,
        xoffset: i32,
        yoffset: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        self.gl(|gl| unsafe {
            gl.CopyTexSubImage2D(target.to_gl(), level, xoffset, yoffset, x, y, width, height)
        });
    }

    pub fn generate_mipmap(&self, target: TextureTarget) {
        self.gl(|gl| unsafe { gl.GenerateMipmap(target.to_gl()) });
    }

    pub fn set_min_filter(&self, target: TextureTarget, filter: TextureMinFilter) {
        self.set_tex_parameter(target, TextureParameter::MinFilter, filter.to_gl());
    }

    pub fn set_mag_filter(&self, target: TextureTarget, filter: TextureMagFilter) {
        self.set_tex_parameter(target, TextureParameter::MagFilter, filter.to_gl());
    }

    pub fn set_wrap_s(&self, target: TextureTarget, wrap: TextureWrap) {
        self.set_tex_parameter(target, TextureParameter::WrapS, wrap.to_gl());
    }

    pub fn set_wrap_t(&self, target: TextureTarget, wrap: TextureWrap) {
        self.set_tex_parameter(target, TextureParameter::WrapT, wrap.to_gl());
    }

    pub fn min_filter(&self, target: TextureTarget) -> Result<TextureMinFilter> {
        TextureMinFilter::try_from_gl(self.tex_parameter(target, TextureParameter::MinFilter))
    }

    pub fn mag_filter(&self, target: TextureTarget) -> Result<TextureMagFilter> {
        TextureMagFilter::try_from_gl(self.tex_parameter(target, TextureParameter::MagFilter))
    }

    pub fn wrap_s(&self, target: TextureTarget) -> Result<TextureWrap> {
        TextureWrap::try_from_gl(self.tex_parameter(target, TextureParameter::WrapS))
    }

    pub fn wrap_t(&self, target: TextureTarget) -> Result<TextureWrap> {
        TextureWrap::try_from_gl(self.tex_parameter(target, TextureParameter::WrapT))
    }

    /// Compressed formats accepted by [`Context::compressed_tex_image_2d`].
    pub fn compressed_texture_formats(&self) -> Vec<GLenum> {
        self.get_token_list(c::NUM_COMPRESSED_TEXTURE_FORMATS, c::COMPRESSED_TEXTURE_FORMATS)
    }

    fn set_tex_parameter(&self, target: TextureTarget, pname: TextureParameter, value: GLenum) {
        self.gl(|gl| unsafe { gl.TexParameteri(target.to_gl(), pname.to_gl(), value as GLint) });
    }

    fn tex_parameter(&self, target: TextureTarget, pname: TextureParameter) -> GLenum {
        let mut value = 0;
        self.gl(|gl| unsafe { gl.GetTexParameteriv(target.to_gl(), pname.to_gl(), &mut value) });
        value as GLenum
    }

    fn check_unpack_len(
        &self,
        width: i32,
        height: i32,
        format: PixelFormat,
        ty: PixelType,
        actual: usize,
    ) -> Result<()> {
        let alignment = self.get_integer(c::UNPACK_ALIGNMENT);
        crate::pixels::check_image_len(width, height, ty.bytes_per_pixel(format), alignment, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::Error;

    #[test]
    fn bound_texture_is_recovered() {
        let (ctx, _driver) = mock_context();
        let texture = Texture::new(&ctx).unwrap();
        texture.bind(TextureTarget::CubeMap);

        assert_eq!(ctx.bound_texture(TextureTarget::CubeMap), Some(texture.clone()));
        assert_eq!(ctx.bound_texture(TextureTarget::Texture2D), None);

        texture.delete();
        assert_eq!(ctx.bound_texture(TextureTarget::CubeMap), None);
    }

    #[test]
    fn active_unit_round_trips() {
        let (ctx, driver) = mock_context();
        ctx.active_texture(TextureUnit(5));

        assert_eq!(ctx.active_texture_unit(), TextureUnit(5));
        assert_eq!(driver.calls_to("ActiveTexture"), vec!["ActiveTexture(0x84c5)"]);
    }

    #[test]
    fn out_of_range_units_reach_the_driver() {
        let (ctx, driver) = mock_context();
        ctx.active_texture(TextureUnit(u32::MAX));

        assert_eq!(driver.calls_to("ActiveTexture"), vec!["ActiveTexture(0x84bf)"]);
    }

    #[test]
    fn parameters_are_typed_both_ways() {
        let (ctx, driver) = mock_context();
        ctx.set_min_filter(TextureTarget::Texture2D, TextureMinFilter::LinearMipmapLinear);
        ctx.set_wrap_t(TextureTarget::Texture2D, TextureWrap::MirroredRepeat);

        assert_eq!(
            ctx.min_filter(TextureTarget::Texture2D).unwrap(),
            TextureMinFilter::LinearMipmapLinear
        );
        assert_eq!(
            ctx.wrap_t(TextureTarget::Texture2D).unwrap(),
            TextureWrap::MirroredRepeat
        );
        assert_eq!(
            driver.calls_to("TexParameteri")[0],
            "TexParameteri(0x0de1, 0x2801, 0x2703)"
        );
    }

    #[test]
    fn unknown_parameter_values_are_errors() {
        let (ctx, driver) = mock_context();
        driver.set_param(c::TEXTURE_2D, c::TEXTURE_MAG_FILTER, &[0x1234]);

        match ctx.mag_filter(TextureTarget::Texture2D) {
            Err(Error::UnknownConstant { kind, value }) => {
                assert_eq!(kind, "TextureMagFilter");
                assert_eq!(value, 0x1234);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn image_upload_uses_format_as_internal_format() {
        let (ctx, driver) = mock_context();
        let pixels = [255u8; 2 * 2 * 4];

        ctx.tex_image_2d(
            TextureImageTarget::Texture2D,
            0,
            PixelFormat::Rgba,
            2,
            2,
            PixelType::UnsignedByte,
            &pixels,
        )
        .unwrap();

        let call = &driver.calls_to("TexImage2D")[0];
        assert!(call.starts_with("TexImage2D(0x0de1, 0, 0x1908, 2, 2, 0, 0x1908, 0x1401, "));
    }

    #[test]
    fn short_pixel_data_is_rejected() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::UNPACK_ALIGNMENT, &[4]);

        // Three RGB rows of 3 bytes padded to 4: 4 + 4 + 3.
        let result = ctx.tex_image_2d(
            TextureImageTarget::CubeMapNegativeY,
            0,
            PixelFormat::Rgb,
            1,
            3,
            PixelType::UnsignedByte,
            &[0u8; 9],
        );

        match result {
            Err(Error::BufferTooSmall { needed, actual }) => {
                assert_eq!((needed, actual), (11, 9));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(driver.calls_to("TexImage2D").is_empty());
    }

    #[test]
    fn empty_images_pass_no_data() {
        let (ctx, driver) = mock_context();
        ctx.tex_image_2d_empty(
            TextureImageTarget::Texture2D,
            1,
            PixelFormat::Luminance,
            4,
            4,
            PixelType::UnsignedByte,
        );

        assert_eq!(
            driver.calls_to("TexImage2D"),
            vec!["TexImage2D(0x0de1, 1, 0x1909, 4, 4, 0, 0x1909, 0x1401, [])"]
        );
    }

    #[test]
    fn compressed_uploads_forward_raw_format() {
        let (ctx, driver) = mock_context();
        ctx.compressed_tex_image_2d(TextureImageTarget::Texture2D, 0, 0x8d64, 4, 4, &[1, 2, 3]);

        assert_eq!(
            driver.calls_to("CompressedTexImage2D"),
            vec!["CompressedTexImage2D(0x0de1, 0, 0x8d64, 4, 4, 0, 3, [1, 2, 3])"]
        );
    }

    #[test]
    fn compressed_formats_are_listed() {
        let (ctx, driver) = mock_context();
        assert!(ctx.compressed_texture_formats().is_empty());

        driver.set_integer(c::NUM_COMPRESSED_TEXTURE_FORMATS, &[2]);
        driver.set_integer(c::COMPRESSED_TEXTURE_FORMATS, &[0x8d64, 0x83f0]);
        assert_eq!(ctx.compressed_texture_formats(), vec![0x8d64, 0x83f0]);
    }
}
