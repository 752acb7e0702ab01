//! Framebuffer objects and their attachments.

use gl::types::GLuint;
use oogles_core::consts as c;
use oogles_core::{
    Attachment, AttachmentObjectType, FramebufferStatus, GlEnum, Gles2, ObjectKind, Result,
    TextureImageTarget,
};
use tracing::trace;

use crate::context::{Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;
use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture;

pub(crate) enum FramebufferKind {}

impl Kind for FramebufferKind {
    const KIND: ObjectKind = ObjectKind::Framebuffer;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.framebuffers
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteFramebuffers(1, &handle);
    }
}

object_wrapper! {
    /// A framebuffer object: a set of texture and renderbuffer attachments
    /// that can be rendered into instead of the window.
    Framebuffer, FramebufferKind
}

impl Framebuffer {
    pub fn new(ctx: &Context) -> Result<Self> {
        let mut handle = 0;
        ctx.gl(|gl| unsafe { gl.GenFramebuffers(1, &mut handle) });
        Object::register(ctx, handle).map(Framebuffer)
    }

    pub fn bind(&self) {
        trace!("bind framebuffer {}", self.handle());
        self.context()
            .gl(|gl| unsafe { gl.BindFramebuffer(c::FRAMEBUFFER, self.handle()) });
    }

    /// False until the object is first bound.
    pub fn is_framebuffer(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsFramebuffer(self.handle()) })
            != c::FALSE
    }
}

/// What an attachment point of the bound framebuffer refers to.
///
/// Objects created outside this crate's registries are reported as `None`
/// inside the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attached {
    None,
    Texture {
        texture: Option<Texture>,
        level: i32,
        /// The attached face for cube maps.
        cube_face: Option<TextureImageTarget>,
    },
    Renderbuffer(Option<Renderbuffer>),
}

impl Context {
    /// Bind the window-system framebuffer.
    pub fn bind_default_framebuffer(&self) {
        trace!("bind default framebuffer");
        self.gl(|gl| unsafe { gl.BindFramebuffer(c::FRAMEBUFFER, 0) });
    }

    /// `None` when the default framebuffer is bound.
    pub fn bound_framebuffer(&self) -> Option<Framebuffer> {
        let handle = self.get_integer(c::FRAMEBUFFER_BINDING) as GLuint;
        Framebuffer::lookup(self, handle)
    }

    /// Attach a texture image to the bound framebuffer. `None` detaches.
    pub fn framebuffer_texture_2d(
        &self,
        attachment: Attachment,
        target: TextureImageTarget,
        texture: Option<&Texture>,
        level: i32,
    ) {
        let handle = texture.map_or(0, Texture::handle);
        self.gl(|gl| unsafe {
            gl.FramebufferTexture2D(
                c::FRAMEBUFFER,
                attachment.to_gl(),
                target.to_gl(),
                handle,
                level,
            )
        });
    }

    /// Attach a renderbuffer to the bound framebuffer. `None` detaches.
    pub fn framebuffer_renderbuffer(
        &self,
        attachment: Attachment,
        renderbuffer: Option<&Renderbuffer>,
    ) {
        let handle = renderbuffer.map_or(0, Renderbuffer::handle);
        self.gl(|gl| unsafe {
            gl.FramebufferRenderbuffer(c::FRAMEBUFFER, attachment.to_gl(), c::RENDERBUFFER, handle)
        });
    }

    /// Detach whatever is attached at `attachment`.
    pub fn detach(&self, attachment: Attachment) {
        self.framebuffer_renderbuffer(attachment, None);
    }

    pub fn check_framebuffer_status(&self) -> Result<FramebufferStatus> {
        let status = self.gl(|gl| unsafe { gl.CheckFramebufferStatus(c::FRAMEBUFFER) });
        FramebufferStatus::try_from_gl(status)
    }

    /// Inspect `attachment` of the bound framebuffer, recovering attached
    /// objects through the registries.
    pub fn framebuffer_attachment(&self, attachment: Attachment) -> Result<Attached> {
        let object_type = AttachmentObjectType::try_from_gl(
            self.attachment_parameter(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE),
        )?;
        let name = || self.attachment_parameter(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_NAME);

        Ok(match object_type {
            AttachmentObjectType::None => Attached::None,
            AttachmentObjectType::Renderbuffer => {
                Attached::Renderbuffer(Renderbuffer::lookup(self, name()))
            }
            AttachmentObjectType::Texture => {
                let texture = Texture::lookup(self, name());
                let level = self
                    .attachment_parameter(attachment, c::FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL)
                    as i32;
                let cube_face = match self.attachment_parameter(
                    attachment,
                    c::FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE,
                ) {
                    0 => None,
                    face => Some(TextureImageTarget::try_from_gl(face)?),
                };
                Attached::Texture {
                    texture,
                    level,
                    cube_face,
                }
            }
        })
    }

    fn attachment_parameter(&self, attachment: Attachment, pname: u32) -> u32 {
        let mut value = 0;
        self.gl(|gl| unsafe {
            gl.GetFramebufferAttachmentParameteriv(
                c::FRAMEBUFFER,
                attachment.to_gl(),
                pname,
                &mut value,
            )
        });
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::{RenderbufferFormat, TextureTarget};

    #[test]
    fn bound_framebuffer_is_recovered() {
        let (ctx, driver) = mock_context();
        let fbo = Framebuffer::new(&ctx).unwrap();
        assert_eq!(ctx.bound_framebuffer(), None);

        fbo.bind();
        assert_eq!(ctx.bound_framebuffer(), Some(fbo.clone()));

        ctx.bind_default_framebuffer();
        assert_eq!(ctx.bound_framebuffer(), None);
        assert_eq!(
            driver.calls_to("BindFramebuffer"),
            vec![
                format!("BindFramebuffer(0x8d40, {})", fbo.handle()),
                "BindFramebuffer(0x8d40, 0)".to_owned(),
            ]
        );
    }

    #[test]
    fn names_become_framebuffers_on_first_bind() {
        let (ctx, _driver) = mock_context();
        let fbo = Framebuffer::new(&ctx).unwrap();
        assert!(!fbo.is_framebuffer());

        fbo.bind();
        assert!(fbo.is_framebuffer());
    }

    #[test]
    fn texture_attachment_is_recovered() {
        let (ctx, _driver) = mock_context();
        let fbo = Framebuffer::new(&ctx).unwrap();
        let texture = Texture::new(&ctx).unwrap();
        texture.bind(TextureTarget::CubeMap);
        fbo.bind();

        ctx.framebuffer_texture_2d(
            Attachment::Color0,
            TextureImageTarget::CubeMapPositiveZ,
            Some(&texture),
            2,
        );

        assert_eq!(
            ctx.framebuffer_attachment(Attachment::Color0).unwrap(),
            Attached::Texture {
                texture: Some(texture),
                level: 2,
                cube_face: Some(TextureImageTarget::CubeMapPositiveZ),
            }
        );
    }

    #[test]
    fn renderbuffer_attachment_is_recovered_and_detached() {
        let (ctx, driver) = mock_context();
        let rbo = Renderbuffer::new(&ctx).unwrap();
        rbo.bind();
        ctx.renderbuffer_storage(RenderbufferFormat::DepthComponent16, 16, 16);

        ctx.framebuffer_renderbuffer(Attachment::Depth, Some(&rbo));
        assert_eq!(
            ctx.framebuffer_attachment(Attachment::Depth).unwrap(),
            Attached::Renderbuffer(Some(rbo.clone()))
        );

        ctx.detach(Attachment::Depth);
        assert_eq!(ctx.framebuffer_attachment(Attachment::Depth).unwrap(), Attached::None);
        assert_eq!(
            driver.calls_to("FramebufferRenderbuffer").last().map(String::as_str),
            Some("FramebufferRenderbuffer(0x8d40, 0x8d00, 0x8d41, 0)")
        );
    }

    #[test]
    fn empty_attachment_points_report_none() {
        let (ctx, _driver) = mock_context();
        assert_eq!(ctx.framebuffer_attachment(Attachment::Stencil).unwrap(), Attached::None);
    }

    #[test]
    fn status_is_typed() {
        let (ctx, driver) = mock_context();
        assert_eq!(ctx.check_framebuffer_status().unwrap(), FramebufferStatus::Complete);

        driver.set_framebuffer_status(c::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT);
        assert_eq!(
            ctx.check_framebuffer_status().unwrap(),
            FramebufferStatus::IncompleteMissingAttachment
        );

        driver.set_framebuffer_status(0);
        assert!(ctx.check_framebuffer_status().is_err());
    }
}
