//! Draw calls.

use std::ffi::c_void;

use gl::types::GLsizei;
use oogles_core::consts as c;
use oogles_core::{DrawMode, GlEnum, IndexType};
use tracing::warn;

use crate::context::Context;

impl Context {
    /// Draw `count` vertices starting at `first` from the enabled arrays.
    pub fn draw_arrays(&self, mode: DrawMode, first: i32, count: i32) {
        self.gl(|gl| unsafe { gl.DrawArrays(mode.to_gl(), first, count) });
    }

    /// Draw `count` indices read from the bound element array buffer,
    /// starting `offset` bytes in.
    pub fn draw_elements(&self, mode: DrawMode, count: i32, ty: IndexType, offset: usize) {
        self.gl(|gl| unsafe {
            gl.DrawElements(mode.to_gl(), count, ty.to_gl(), offset as *const c_void)
        });
    }

    /// Draw with indices taken from client memory.
    ///
    /// Client indices only work while no element array buffer is bound; with
    /// one bound the driver would read the slice address as a buffer offset,
    /// so the draw is skipped.
    pub fn draw_elements_u8(&self, mode: DrawMode, indices: &[u8]) {
        let (count, pointer) = (indices.len(), indices.as_ptr().cast());
        self.draw_client_elements(mode, IndexType::UnsignedByte, count, pointer);
    }

    /// 16-bit variant of [`Context::draw_elements_u8`].
    pub fn draw_elements_u16(&self, mode: DrawMode, indices: &[u16]) {
        let (count, pointer) = (indices.len(), indices.as_ptr().cast());
        self.draw_client_elements(mode, IndexType::UnsignedShort, count, pointer);
    }

    fn draw_client_elements(
        &self,
        mode: DrawMode,
        ty: IndexType,
        count: usize,
        indices: *const c_void,
    ) {
        let bound = self.get_integer(c::ELEMENT_ARRAY_BUFFER_BINDING);
        if bound != 0 {
            warn!("skipping client-side {ty:?} draw: element buffer {bound} is bound");
            return;
        }
        self.gl(|gl| unsafe {
            gl.DrawElements(mode.to_gl(), count as GLsizei, ty.to_gl(), indices)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::context::tests::mock_context;
    use oogles_core::BufferTarget;

    #[test]
    fn arrays_forward_range() {
        let (ctx, driver) = mock_context();
        ctx.draw_arrays(DrawMode::Triangles, 0, 3);

        assert_eq!(driver.calls_to("DrawArrays"), vec!["DrawArrays(0x0004, 0, 3)"]);
    }

    #[test]
    fn client_indices_are_passed_by_address() {
        let (ctx, driver) = mock_context();
        ctx.draw_elements_u16(DrawMode::TriangleStrip, &[0, 1, 2]);
        ctx.draw_elements_u8(DrawMode::Lines, &[3, 4]);

        assert_eq!(
            driver.calls_to("DrawElements"),
            vec![
                "DrawElements(0x0005, 3, 0x1403, [0, 0, 1, 0, 2, 0])",
                "DrawElements(0x0001, 2, 0x1401, [3, 4])",
            ]
        );
    }

    #[test]
    fn buffered_indices_use_offsets() {
        let (ctx, driver) = mock_context();
        let indices = Buffer::new(&ctx).unwrap();
        indices.bind(BufferTarget::ElementArray);

        ctx.draw_elements(DrawMode::Triangles, 6, IndexType::UnsignedShort, 12);

        assert_eq!(
            driver.calls_to("DrawElements"),
            vec!["DrawElements(0x0004, 6, 0x1403, 0xc)"]
        );
    }

    #[test]
    fn client_draws_are_skipped_with_an_element_buffer_bound() {
        let (ctx, driver) = mock_context();
        let indices = Buffer::new(&ctx).unwrap();
        indices.bind(BufferTarget::ElementArray);

        ctx.draw_elements_u8(DrawMode::Points, &[0]);

        assert!(driver.calls_to("DrawElements").is_empty());
    }
}
