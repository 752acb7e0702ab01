//! Rasterization state: culling, winding, viewport and depth range.

use gl::types::GLenum;
use oogles_core::consts as c;
use oogles_core::{Face, FrontFace, GlEnum, Result};

use crate::context::Context;

impl Context {
    /// Select the faces discarded while [`Capability::CullFace`] is enabled.
    ///
    /// [`Capability::CullFace`]: oogles_core::Capability::CullFace
    pub fn cull_face(&self, face: Face) {
        self.gl(|gl| unsafe { gl.CullFace(face.to_gl()) });
    }

    pub fn front_face(&self, winding: FrontFace) {
        self.gl(|gl| unsafe { gl.FrontFace(winding.to_gl()) });
    }

    pub fn line_width(&self, width: f32) {
        self.gl(|gl| unsafe { gl.LineWidth(width) });
    }

    pub fn polygon_offset(&self, factor: f32, units: f32) {
        self.gl(|gl| unsafe { gl.PolygonOffset(factor, units) });
    }

    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl(|gl| unsafe { gl.Viewport(x, y, width, height) });
    }

    /// Map normalized device depth onto `[near, far]`, both clamped to `[0, 1]`.
    pub fn depth_range(&self, near: f32, far: f32) {
        self.gl(|gl| unsafe { gl.DepthRangef(near, far) });
    }

    /// The viewport as `[x, y, width, height]`.
    pub fn viewport_rect(&self) -> [i32; 4] {
        self.get_integers(c::VIEWPORT)
    }

    /// The depth range as `[near, far]`.
    pub fn current_depth_range(&self) -> [f32; 2] {
        self.get_floats(c::DEPTH_RANGE)
    }

    pub fn current_line_width(&self) -> f32 {
        let [width] = self.get_floats(c::LINE_WIDTH);
        width
    }

    pub fn front_face_mode(&self) -> Result<FrontFace> {
        FrontFace::try_from_gl(self.get_integer(c::FRONT_FACE) as GLenum)
    }

    pub fn cull_face_mode(&self) -> Result<Face> {
        Face::try_from_gl(self.get_integer(c::CULL_FACE_MODE) as GLenum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::Error;

    #[test]
    fn culling_state_reads_back() {
        let (ctx, driver) = mock_context();
        ctx.cull_face(Face::Front);
        ctx.front_face(FrontFace::Clockwise);

        assert_eq!(ctx.cull_face_mode().unwrap(), Face::Front);
        assert_eq!(ctx.front_face_mode().unwrap(), FrontFace::Clockwise);
        assert_eq!(driver.calls_to("CullFace"), vec!["CullFace(0x0404)"]);
        assert_eq!(driver.calls_to("FrontFace"), vec!["FrontFace(0x0900)"]);
    }

    #[test]
    fn fresh_contexts_report_gl_defaults() {
        let (ctx, _driver) = mock_context();
        assert_eq!(ctx.front_face_mode().unwrap(), FrontFace::CounterClockwise);
        assert_eq!(ctx.cull_face_mode().unwrap(), Face::Back);
    }

    #[test]
    fn unknown_winding_tokens_are_errors() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::FRONT_FACE, &[c::TEXTURE_2D as i32]);

        assert!(matches!(
            ctx.front_face_mode(),
            Err(Error::UnknownConstant { kind: "FrontFace", .. })
        ));
    }

    #[test]
    fn viewport_reads_back() {
        let (ctx, _driver) = mock_context();
        ctx.viewport(10, 20, 640, 480);

        assert_eq!(ctx.viewport_rect(), [10, 20, 640, 480]);
    }

    #[test]
    fn scalar_state_is_forwarded() {
        let (ctx, driver) = mock_context();
        ctx.line_width(2.5);
        ctx.polygon_offset(1.0, -1.0);
        ctx.depth_range(0.25, 0.75);

        assert_eq!(
            driver.take_calls(),
            vec!["LineWidth(2.5)", "PolygonOffset(1, -1)", "DepthRangef(0.25, 0.75)"]
        );
        assert_eq!(ctx.current_line_width(), 2.5);
        assert_eq!(ctx.current_depth_range(), [0.25, 0.75]);
    }
}
