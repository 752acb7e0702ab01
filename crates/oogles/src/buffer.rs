//! Vertex and index buffers.

use std::ffi::c_void;

use gl::types::{GLintptr, GLsizeiptr, GLuint};
use oogles_core::consts as c;
use oogles_core::{BufferParameter, BufferTarget, BufferUsage, GlEnum, Gles2, ObjectKind, Result};
use tracing::trace;

use crate::bytes::{as_bytes, Plain};
use crate::context::{Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;

pub(crate) enum BufferKind {}

impl Kind for BufferKind {
    const KIND: ObjectKind = ObjectKind::Buffer;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.buffers
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteBuffers(1, &handle);
    }
}

object_wrapper! {
    /// A buffer object holding vertex attributes or indices.
    Buffer, BufferKind
}

impl Buffer {
    pub fn new(ctx: &Context) -> Result<Self> {
        let mut handle = 0;
        ctx.gl(|gl| unsafe { gl.GenBuffers(1, &mut handle) });
        Object::register(ctx, handle).map(Buffer)
    }

    pub fn bind(&self, target: BufferTarget) {
        trace!("bind buffer {} to {target:?}", self.handle());
        self.context()
            .gl(|gl| unsafe { gl.BindBuffer(target.to_gl(), self.handle()) });
    }

    /// Whether the driver still knows this name as a buffer. False until the
    /// buffer is first bound.
    pub fn is_buffer(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsBuffer(self.handle()) })
            != c::FALSE
    }
}

impl Context {
    pub fn unbind_buffer(&self, target: BufferTarget) {
        trace!("unbind {target:?}");
        self.gl(|gl| unsafe { gl.BindBuffer(target.to_gl(), 0) });
    }

    /// The buffer bound to `target`, if it was created through this context.
    pub fn bound_buffer(&self, target: BufferTarget) -> Option<Buffer> {
        let handle = self.get_integer(target.binding()) as GLuint;
        Buffer::lookup(self, handle)
    }

    /// Replace the store of the buffer bound to `target` with `data`.
    pub fn buffer_data<T: Plain>(&self, target: BufferTarget, data: &[T], usage: BufferUsage) {
        let bytes = as_bytes(data);
        self.gl(|gl| unsafe {
            gl.BufferData(
                target.to_gl(),
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                usage.to_gl(),
            )
        });
    }

    /// [`Context::buffer_data`] with the elements of `data` from `offset` on.
    ///
    /// # Panics
    /// If `offset` is past the end of `data`.
    pub fn buffer_data_from<T: Plain>(
        &self,
        target: BufferTarget,
        data: &[T],
        offset: usize,
        usage: BufferUsage,
    ) {
        self.buffer_data(target, &data[offset..], usage);
    }

    /// Allocate `size` bytes of undefined contents.
    pub fn buffer_data_uninit(&self, target: BufferTarget, size: usize, usage: BufferUsage) {
        self.gl(|gl| unsafe {
            gl.BufferData(
                target.to_gl(),
                size as GLsizeiptr,
                std::ptr::null(),
                usage.to_gl(),
            )
        });
    }

    /// Overwrite part of the store, starting `offset` bytes in.
    pub fn buffer_sub_data<T: Plain>(&self, target: BufferTarget, offset: usize, data: &[T]) {
        let bytes = as_bytes(data);
        self.gl(|gl| unsafe {
            gl.BufferSubData(
                target.to_gl(),
                offset as GLintptr,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
            )
        });
    }

    /// Size in bytes of the store bound to `target`.
    pub fn buffer_size(&self, target: BufferTarget) -> usize {
        self.buffer_parameter(target, BufferParameter::Size).max(0) as usize
    }

    pub fn buffer_usage(&self, target: BufferTarget) -> Result<BufferUsage> {
        BufferUsage::try_from_gl(self.buffer_parameter(target, BufferParameter::Usage) as u32)
    }

    fn buffer_parameter(&self, target: BufferTarget, pname: BufferParameter) -> i32 {
        let mut value = 0;
        self.gl(|gl| unsafe { gl.GetBufferParameteriv(target.to_gl(), pname.to_gl(), &mut value) });
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::Error;

    #[test]
    fn registry_hands_back_the_same_instance() {
        let (ctx, _driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        buffer.bind(BufferTarget::Array);

        let bound = ctx.bound_buffer(BufferTarget::Array).unwrap();
        assert_eq!(bound, buffer);
        assert_eq!(ctx.bound_buffer(BufferTarget::ElementArray), None);
    }

    #[test]
    fn delete_is_idempotent() {
        let (ctx, driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        let handle = buffer.handle();

        buffer.delete();
        buffer.delete();
        drop(buffer);

        assert_eq!(driver.calls_to("DeleteBuffers"), vec![format!("DeleteBuffers([{handle}])")]);
        assert!(!driver.is_live(handle));
    }

    #[test]
    fn deleted_buffers_are_not_looked_up() {
        let (ctx, _driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        let handle = buffer.handle();
        let clone = buffer.clone();

        clone.delete();

        assert!(buffer.is_deleted());
        assert_eq!(buffer.handle(), 0);
        assert_eq!(Buffer::lookup(&ctx, handle), None);
        assert_eq!(ctx.live_objects(ObjectKind::Buffer), 0);
    }

    #[test]
    fn last_drop_deletes() {
        let (ctx, driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        let clone = buffer.clone();

        drop(buffer);
        assert!(driver.calls_to("DeleteBuffers").is_empty());
        assert_eq!(ctx.live_objects(ObjectKind::Buffer), 1);

        drop(clone);
        assert_eq!(driver.calls_to("DeleteBuffers").len(), 1);
        assert_eq!(ctx.live_objects(ObjectKind::Buffer), 0);
    }

    #[test]
    fn creation_fails_on_zero_name() {
        let (ctx, driver) = mock_context();
        driver.fail_generation(true);

        match Buffer::new(&ctx) {
            Err(Error::CreationFailed(ObjectKind::Buffer)) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert!(driver.calls_to("DeleteBuffers").is_empty());
    }

    #[test]
    fn data_from_offset_matches_presliced_upload() {
        let (ctx, driver) = mock_context();
        let data = [1u16, 2, 3, 4];

        ctx.buffer_data(BufferTarget::Array, &data[2..], BufferUsage::StaticDraw);
        ctx.buffer_data_from(BufferTarget::Array, &data, 2, BufferUsage::StaticDraw);

        let calls = driver.calls_to("BufferData");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0], "BufferData(0x8892, 4, [3, 0, 4, 0], 0x88e4)");
    }

    #[test]
    fn store_parameters_are_typed() {
        let (ctx, driver) = mock_context();
        ctx.buffer_data_uninit(BufferTarget::ElementArray, 64, BufferUsage::DynamicDraw);

        assert_eq!(ctx.buffer_size(BufferTarget::ElementArray), 64);
        assert_eq!(
            ctx.buffer_usage(BufferTarget::ElementArray).unwrap(),
            BufferUsage::DynamicDraw
        );
        assert_eq!(
            driver.calls_to("BufferData"),
            vec!["BufferData(0x8893, 64, [], 0x88e8)"]
        );
    }

    #[test]
    fn sub_data_uploads_bytes_at_offset() {
        let (ctx, driver) = mock_context();
        ctx.buffer_sub_data(BufferTarget::Array, 8, &[7u8, 9]);

        assert_eq!(
            driver.calls_to("BufferSubData"),
            vec!["BufferSubData(0x8892, 8, 2, [7, 9])"]
        );
    }

    #[test]
    fn is_buffer_reflects_driver_state() {
        let (ctx, _driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        assert!(!buffer.is_buffer());
        buffer.bind(BufferTarget::Array);
        assert!(buffer.is_buffer());
        buffer.delete();
        assert!(!buffer.is_buffer());
    }
}
