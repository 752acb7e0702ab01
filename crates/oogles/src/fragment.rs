//! Per-fragment operations, write masks and clearing.

use oogles_core::{BlendEquation, BlendFactor, ClearMask, CompareFunc, Face, GlEnum, StencilOp};

use crate::context::Context;

impl Context {
    pub fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl(|gl| unsafe { gl.Scissor(x, y, width, height) });
    }

    /// Multisample coverage value, used while sample coverage is enabled.
    pub fn sample_coverage(&self, value: f32, invert: bool) {
        self.gl(|gl| unsafe { gl.SampleCoverage(value, invert as u8) });
    }

    pub fn stencil_func(&self, func: CompareFunc, reference: i32, mask: u32) {
        self.gl(|gl| unsafe { gl.StencilFunc(func.to_gl(), reference, mask) });
    }

    pub fn stencil_func_separate(&self, face: Face, func: CompareFunc, reference: i32, mask: u32) {
        self.gl(|gl| unsafe {
            gl.StencilFuncSeparate(face.to_gl(), func.to_gl(), reference, mask)
        });
    }

    /// Actions taken when the stencil test fails, when it passes but the
    /// depth test fails, and when both pass.
    pub fn stencil_op(&self, stencil_fail: StencilOp, depth_fail: StencilOp, pass: StencilOp) {
        self.gl(|gl| unsafe {
            gl.StencilOp(stencil_fail.to_gl(), depth_fail.to_gl(), pass.to_gl())
        });
    }

    pub fn stencil_op_separate(
        &self,
        face: Face,
        stencil_fail: StencilOp,
        depth_fail: StencilOp,
        pass: StencilOp,
    ) {
        self.gl(|gl| unsafe {
            gl.StencilOpSeparate(
                face.to_gl(),
                stencil_fail.to_gl(),
                depth_fail.to_gl(),
                pass.to_gl(),
            )
        });
    }

    pub fn depth_func(&self, func: CompareFunc) {
        self.gl(|gl| unsafe { gl.DepthFunc(func.to_gl()) });
    }

    pub fn blend_equation(&self, equation: BlendEquation) {
        self.gl(|gl| unsafe { gl.BlendEquation(equation.to_gl()) });
    }

    pub fn blend_equation_separate(&self, rgb: BlendEquation, alpha: BlendEquation) {
        self.gl(|gl| unsafe { gl.BlendEquationSeparate(rgb.to_gl(), alpha.to_gl()) });
    }

    pub fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.gl(|gl| unsafe { gl.BlendFunc(src.to_gl(), dst.to_gl()) });
    }

    pub fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        self.gl(|gl| unsafe {
            gl.BlendFuncSeparate(
                src_rgb.to_gl(),
                dst_rgb.to_gl(),
                src_alpha.to_gl(),
                dst_alpha.to_gl(),
            )
        });
    }

    /// The color used by the `Constant*` blend factors.
    pub fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.gl(|gl| unsafe { gl.BlendColor(red, green, blue, alpha) });
    }

    pub fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        self.gl(|gl| unsafe { gl.ColorMask(red as u8, green as u8, blue as u8, alpha as u8) });
    }

    pub fn depth_mask(&self, write: bool) {
        self.gl(|gl| unsafe { gl.DepthMask(write as u8) });
    }

    pub fn stencil_mask(&self, mask: u32) {
        self.gl(|gl| unsafe { gl.StencilMask(mask) });
    }

    pub fn stencil_mask_separate(&self, face: Face, mask: u32) {
        self.gl(|gl| unsafe { gl.StencilMaskSeparate(face.to_gl(), mask) });
    }

    pub fn clear(&self, mask: ClearMask) {
        self.gl(|gl| unsafe { gl.Clear(mask.bits()) });
    }

    pub fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.gl(|gl| unsafe { gl.ClearColor(red, green, blue, alpha) });
    }

    pub fn clear_depth(&self, depth: f32) {
        self.gl(|gl| unsafe { gl.ClearDepthf(depth) });
    }

    pub fn clear_stencil(&self, value: i32) {
        self.gl(|gl| unsafe { gl.ClearStencil(value) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;

    #[test]
    fn clears_combine_masks() {
        let (ctx, driver) = mock_context();
        ctx.clear_color(0.0, 0.5, 1.0, 1.0);
        ctx.clear_depth(1.0);
        ctx.clear_stencil(0);
        ctx.clear(ClearMask::COLOR | ClearMask::DEPTH);

        assert_eq!(
            driver.take_calls(),
            vec![
                "ClearColor(0, 0.5, 1, 1)",
                "ClearDepthf(1)",
                "ClearStencil(0)",
                "Clear(0x4100)",
            ]
        );
    }

    #[test]
    fn blending_forwards_tokens() {
        let (ctx, driver) = mock_context();
        ctx.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        ctx.blend_func_separate(
            BlendFactor::One,
            BlendFactor::Zero,
            BlendFactor::SrcAlpha,
            BlendFactor::One,
        );
        ctx.blend_equation_separate(BlendEquation::Add, BlendEquation::Subtract);

        assert_eq!(
            driver.take_calls(),
            vec![
                "BlendFunc(0x0302, 0x0303)",
                "BlendFuncSeparate(0x0001, 0x0000, 0x0302, 0x0001)",
                "BlendEquationSeparate(0x8006, 0x800a)",
            ]
        );
    }

    #[test]
    fn stencil_state_is_per_face() {
        let (ctx, driver) = mock_context();
        ctx.stencil_func_separate(Face::Back, CompareFunc::Always, 1, 0xff);
        ctx.stencil_op(StencilOp::Keep, StencilOp::Keep, StencilOp::Replace);
        ctx.stencil_mask_separate(Face::Back, 0x0f);

        assert_eq!(
            driver.take_calls(),
            vec![
                "StencilFuncSeparate(0x0405, 0x0207, 1, 0xff)",
                "StencilOp(0x1e00, 0x1e00, 0x1e01)",
                "StencilMaskSeparate(0x0405, 0xf)",
            ]
        );
    }

    #[test]
    fn masks_pass_booleans_as_gl_booleans() {
        let (ctx, driver) = mock_context();
        ctx.color_mask(true, false, true, false);
        ctx.depth_mask(false);
        ctx.sample_coverage(0.5, true);

        assert_eq!(
            driver.take_calls(),
            vec!["ColorMask(1, 0, 1, 0)", "DepthMask(0)", "SampleCoverage(0.5, 1)"]
        );
    }

    #[test]
    fn depth_func_reads_back_through_the_driver() {
        let (ctx, _driver) = mock_context();
        ctx.depth_func(CompareFunc::LessEqual);
        assert_eq!(ctx.get_integer(oogles_core::consts::DEPTH_FUNC) as u32, 0x0203);
    }
}
