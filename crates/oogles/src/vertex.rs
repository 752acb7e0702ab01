//! Vertex attribute arrays and constant attribute values.

use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLuint};
use oogles_core::consts as c;
use oogles_core::{GlEnum, Result, VertexAttribType};

use crate::buffer::Buffer;
use crate::bytes::Plain;
use crate::context::Context;

/// State of one generic vertex attribute array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttrib {
    pub enabled: bool,
    pub size: i32,
    pub stride: i32,
    pub ty: VertexAttribType,
    pub normalized: bool,
    /// The array buffer captured by the last pointer call, if it was
    /// created through this context.
    pub buffer: Option<Buffer>,
}

impl Context {
    pub fn enable_vertex_attrib_array(&self, index: u32) {
        self.gl(|gl| unsafe { gl.EnableVertexAttribArray(index) });
    }

    pub fn disable_vertex_attrib_array(&self, index: u32) {
        self.gl(|gl| unsafe { gl.DisableVertexAttribArray(index) });
    }

    /// Source attribute `index` from the bound array buffer, starting
    /// `offset` bytes in.
    pub fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        ty: VertexAttribType,
        normalized: bool,
        stride: i32,
        offset: usize,
    ) {
        self.gl(|gl| unsafe {
            gl.VertexAttribPointer(
                index,
                size,
                ty.to_gl(),
                normalized as u8,
                stride,
                offset as *const c_void,
            )
        });
    }

    /// Source attribute `index` from client memory.
    ///
    /// # Safety
    /// The driver reads `data` at draw time, not now. `data` must outlive
    /// every draw call that uses this attribute, and no array buffer may be
    /// bound, otherwise the address is taken as a buffer offset.
    pub unsafe fn vertex_attrib_pointer_client<T: Plain>(
        &self,
        index: u32,
        size: i32,
        ty: VertexAttribType,
        normalized: bool,
        stride: i32,
        data: &[T],
    ) {
        self.gl(|gl| unsafe {
            gl.VertexAttribPointer(
                index,
                size,
                ty.to_gl(),
                normalized as u8,
                stride,
                data.as_ptr() as *const c_void,
            )
        });
    }

    pub fn vertex_attrib_1f(&self, index: u32, x: f32) {
        self.gl(|gl| unsafe { gl.VertexAttrib1f(index, x) });
    }

    pub fn vertex_attrib_2f(&self, index: u32, x: f32, y: f32) {
        self.gl(|gl| unsafe { gl.VertexAttrib2f(index, x, y) });
    }

    pub fn vertex_attrib_3f(&self, index: u32, x: f32, y: f32, z: f32) {
        self.gl(|gl| unsafe { gl.VertexAttrib3f(index, x, y, z) });
    }

    pub fn vertex_attrib_4f(&self, index: u32, x: f32, y: f32, z: f32, w: f32) {
        self.gl(|gl| unsafe { gl.VertexAttrib4f(index, x, y, z, w) });
    }

    pub fn vertex_attrib_1fv(&self, index: u32, v: &[f32; 1]) {
        self.gl(|gl| unsafe { gl.VertexAttrib1fv(index, v.as_ptr()) });
    }

    pub fn vertex_attrib_2fv(&self, index: u32, v: &[f32; 2]) {
        self.gl(|gl| unsafe { gl.VertexAttrib2fv(index, v.as_ptr()) });
    }

    pub fn vertex_attrib_3fv(&self, index: u32, v: &[f32; 3]) {
        self.gl(|gl| unsafe { gl.VertexAttrib3fv(index, v.as_ptr()) });
    }

    pub fn vertex_attrib_4fv(&self, index: u32, v: &[f32; 4]) {
        self.gl(|gl| unsafe { gl.VertexAttrib4fv(index, v.as_ptr()) });
    }

    pub fn vertex_attrib(&self, index: u32) -> Result<VertexAttrib> {
        let get = |pname: GLenum| {
            let mut value: GLint = 0;
            self.gl(|gl| unsafe { gl.GetVertexAttribiv(index, pname, &mut value) });
            value
        };
        Ok(VertexAttrib {
            enabled: get(c::VERTEX_ATTRIB_ARRAY_ENABLED) != 0,
            size: get(c::VERTEX_ATTRIB_ARRAY_SIZE),
            stride: get(c::VERTEX_ATTRIB_ARRAY_STRIDE),
            ty: VertexAttribType::try_from_gl(get(c::VERTEX_ATTRIB_ARRAY_TYPE) as GLenum)?,
            normalized: get(c::VERTEX_ATTRIB_ARRAY_NORMALIZED) != 0,
            buffer: Buffer::lookup(self, get(c::VERTEX_ATTRIB_ARRAY_BUFFER_BINDING) as GLuint),
        })
    }

    /// The constant value used while the array for `index` is disabled.
    pub fn current_vertex_attrib(&self, index: u32) -> [f32; 4] {
        let mut value = [0.0; 4];
        self.gl(|gl| unsafe {
            gl.GetVertexAttribfv(index, c::CURRENT_VERTEX_ATTRIB, value.as_mut_ptr())
        });
        value
    }

    /// Byte offset (or client address) given to the last pointer call.
    pub fn vertex_attrib_offset(&self, index: u32) -> usize {
        let mut pointer: *mut c_void = std::ptr::null_mut();
        self.gl(|gl| unsafe {
            gl.GetVertexAttribPointerv(index, c::VERTEX_ATTRIB_ARRAY_POINTER, &mut pointer)
        });
        pointer as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::BufferTarget;

    #[test]
    fn attribute_state_recovers_the_source_buffer() {
        let (ctx, _driver) = mock_context();
        let buffer = Buffer::new(&ctx).unwrap();
        buffer.bind(BufferTarget::Array);

        ctx.vertex_attrib_pointer(1, 3, VertexAttribType::Float, false, 20, 8);
        ctx.enable_vertex_attrib_array(1);

        assert_eq!(
            ctx.vertex_attrib(1).unwrap(),
            VertexAttrib {
                enabled: true,
                size: 3,
                stride: 20,
                ty: VertexAttribType::Float,
                normalized: false,
                buffer: Some(buffer),
            }
        );
        assert_eq!(ctx.vertex_attrib_offset(1), 8);
    }

    #[test]
    fn pointer_calls_forward_offsets() {
        let (ctx, driver) = mock_context();
        ctx.vertex_attrib_pointer(0, 4, VertexAttribType::UnsignedByte, true, 0, 16);

        assert_eq!(
            driver.calls_to("VertexAttribPointer"),
            vec!["VertexAttribPointer(0, 4, 0x1401, 1, 0, 0x10)"]
        );
    }

    #[test]
    fn client_arrays_pass_their_address() {
        let (ctx, _driver) = mock_context();
        let data = [0.0f32; 6];

        unsafe {
            ctx.vertex_attrib_pointer_client(2, 2, VertexAttribType::Float, false, 0, &data);
        }

        assert_eq!(ctx.vertex_attrib_offset(2), data.as_ptr() as usize);
        assert_eq!(ctx.vertex_attrib(2).unwrap().buffer, None);
    }

    #[test]
    fn constant_attributes_forward_values() {
        let (ctx, driver) = mock_context();
        ctx.vertex_attrib_3f(4, 1.0, 0.5, 0.0);
        ctx.vertex_attrib_4fv(4, &[1.0, 2.0, 3.0, 4.0]);
        ctx.disable_vertex_attrib_array(4);

        assert_eq!(
            driver.take_calls(),
            vec![
                "VertexAttrib3f(4, 1, 0.5, 0)",
                "VertexAttrib4fv(4, [1.0, 2.0, 3.0, 4.0])",
                "DisableVertexAttribArray(4)",
            ]
        );
    }
}
