//! Renderbuffers: offscreen images used only as framebuffer attachments.

use gl::types::{GLenum, GLuint};
use oogles_core::consts as c;
use oogles_core::{GlEnum, Gles2, ObjectKind, RenderbufferFormat, Result};
use tracing::trace;

use crate::context::{Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;

pub(crate) enum RenderbufferKind {}

impl Kind for RenderbufferKind {
    const KIND: ObjectKind = ObjectKind::Renderbuffer;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.renderbuffers
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteRenderbuffers(1, &handle);
    }
}

object_wrapper! {
    Renderbuffer, RenderbufferKind
}

impl Renderbuffer {
    pub fn new(ctx: &Context) -> Result<Self> {
        let mut handle = 0;
        ctx.gl(|gl| unsafe { gl.GenRenderbuffers(1, &mut handle) });
        Object::register(ctx, handle).map(Renderbuffer)
    }

    pub fn bind(&self) {
        trace!("bind renderbuffer {}", self.handle());
        self.context()
            .gl(|gl| unsafe { gl.BindRenderbuffer(c::RENDERBUFFER, self.handle()) });
    }

    /// False until the object is first bound.
    pub fn is_renderbuffer(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsRenderbuffer(self.handle()) })
            != c::FALSE
    }
}

/// Storage of the bound renderbuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderbufferInfo {
    pub width: i32,
    pub height: i32,
    pub format: RenderbufferFormat,
    pub red_size: i32,
    pub green_size: i32,
    pub blue_size: i32,
    pub alpha_size: i32,
    pub depth_size: i32,
    pub stencil_size: i32,
}

impl Context {
    pub fn unbind_renderbuffer(&self) {
        trace!("unbind renderbuffer");
        self.gl(|gl| unsafe { gl.BindRenderbuffer(c::RENDERBUFFER, 0) });
    }

    pub fn bound_renderbuffer(&self) -> Option<Renderbuffer> {
        let handle = self.get_integer(c::RENDERBUFFER_BINDING) as GLuint;
        Renderbuffer::lookup(self, handle)
    }

    /// Allocate storage for the bound renderbuffer.
    pub fn renderbuffer_storage(&self, format: RenderbufferFormat, width: i32, height: i32) {
        self.gl(|gl| unsafe {
            gl.RenderbufferStorage(c::RENDERBUFFER, format.to_gl(), width, height)
        });
    }

    pub fn renderbuffer_info(&self) -> Result<RenderbufferInfo> {
        let get = |pname: GLenum| {
            let mut value = 0;
            self.gl(|gl| unsafe {
                gl.GetRenderbufferParameteriv(c::RENDERBUFFER, pname, &mut value)
            });
            value
        };
        Ok(RenderbufferInfo {
            width: get(c::RENDERBUFFER_WIDTH),
            height: get(c::RENDERBUFFER_HEIGHT),
            format: RenderbufferFormat::try_from_gl(
                get(c::RENDERBUFFER_INTERNAL_FORMAT) as GLenum,
            )?,
            red_size: get(c::RENDERBUFFER_RED_SIZE),
            green_size: get(c::RENDERBUFFER_GREEN_SIZE),
            blue_size: get(c::RENDERBUFFER_BLUE_SIZE),
            alpha_size: get(c::RENDERBUFFER_ALPHA_SIZE),
            depth_size: get(c::RENDERBUFFER_DEPTH_SIZE),
            stencil_size: get(c::RENDERBUFFER_STENCIL_SIZE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;

    #[test]
    fn storage_is_reported_back() {
        let (ctx, driver) = mock_context();
        let rbo = Renderbuffer::new(&ctx).unwrap();
        rbo.bind();
        driver.set_param(c::RENDERBUFFER, c::RENDERBUFFER_DEPTH_SIZE, &[16]);

        ctx.renderbuffer_storage(RenderbufferFormat::DepthComponent16, 320, 240);
        let info = ctx.renderbuffer_info().unwrap();

        assert_eq!((info.width, info.height), (320, 240));
        assert_eq!(info.format, RenderbufferFormat::DepthComponent16);
        assert_eq!(info.depth_size, 16);
        assert_eq!(info.red_size, 0);
    }

    #[test]
    fn bound_renderbuffer_follows_binds() {
        let (ctx, _driver) = mock_context();
        let rbo = Renderbuffer::new(&ctx).unwrap();

        rbo.bind();
        assert_eq!(ctx.bound_renderbuffer(), Some(rbo.clone()));
        ctx.unbind_renderbuffer();
        assert_eq!(ctx.bound_renderbuffer(), None);
    }

    #[test]
    fn drop_deletes_once() {
        let (ctx, driver) = mock_context();
        let rbo = Renderbuffer::new(&ctx).unwrap();
        assert!(!rbo.is_renderbuffer());
        rbo.bind();
        assert!(rbo.is_renderbuffer());
        let handle = rbo.handle();
        drop(rbo);

        assert_eq!(
            driver.calls_to("DeleteRenderbuffers"),
            vec![format!("DeleteRenderbuffers([{handle}])")]
        );
    }
}
