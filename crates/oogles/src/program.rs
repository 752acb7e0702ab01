//! Program objects, attribute and uniform locations, and uniform upload.

use std::ffi::CString;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use oogles_core::consts as c;
use oogles_core::{Error, GlEnum, Gles2, ObjectKind, Result, VariableType};
use tracing::{debug, trace, warn};

use crate::context::{read_string, Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;
use crate::shader::Shader;

pub(crate) enum ProgramKind {}

impl Kind for ProgramKind {
    const KIND: ObjectKind = ObjectKind::Program;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.programs
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteProgram(handle);
    }
}

object_wrapper! {
    /// A program: shaders linked into an executable for the programmable
    /// stages.
    Program, ProgramKind
}

/// Location of a uniform in the program that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(GLint);

impl UniformLocation {
    pub fn raw(self) -> GLint {
        self.0
    }
}

/// An active attribute or uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub name: String,
    /// Array length, `1` for non-arrays.
    pub size: i32,
    pub ty: VariableType,
}

impl Program {
    pub fn new(ctx: &Context) -> Result<Self> {
        let handle = ctx.gl(|gl| unsafe { gl.CreateProgram() });
        Object::register(ctx, handle).map(Program)
    }

    /// Create a program from `shaders` and link it, returning the info log
    /// as [`Error::Link`] on failure.
    pub fn linked(ctx: &Context, shaders: &[&Shader]) -> Result<Self> {
        let program = Self::new(ctx)?;
        for shader in shaders {
            program.attach(shader);
        }
        program.link();
        if !program.link_status() {
            let log = program.info_log();
            warn!("program {} failed to link: {log}", program.handle());
            return Err(Error::Link(log));
        }
        debug!("linked program {}", program.handle());
        Ok(program)
    }

    pub fn attach(&self, shader: &Shader) {
        self.context()
            .gl(|gl| unsafe { gl.AttachShader(self.handle(), shader.handle()) });
    }

    pub fn detach(&self, shader: &Shader) {
        self.context()
            .gl(|gl| unsafe { gl.DetachShader(self.handle(), shader.handle()) });
    }

    /// The attached shaders created through this context.
    pub fn attached_shaders(&self) -> Vec<Shader> {
        let count = self.parameter(c::ATTACHED_SHADERS);
        if count <= 0 {
            return Vec::new();
        }
        let mut handles: Vec<GLuint> = vec![0; count as usize];
        let mut written: GLsizei = 0;
        self.context().gl(|gl| unsafe {
            gl.GetAttachedShaders(self.handle(), count, &mut written, handles.as_mut_ptr())
        });
        handles.truncate(written.clamp(0, count) as usize);
        handles
            .into_iter()
            .filter_map(|handle| Shader::lookup(self.context(), handle))
            .collect()
    }

    pub fn link(&self) {
        self.context().gl(|gl| unsafe { gl.LinkProgram(self.handle()) });
    }

    pub fn link_status(&self) -> bool {
        self.parameter(c::LINK_STATUS) != 0
    }

    /// Check whether the program can run in the current state. The result
    /// is in [`Program::validate_status`] and [`Program::info_log`].
    pub fn validate(&self) {
        self.context().gl(|gl| unsafe { gl.ValidateProgram(self.handle()) });
    }

    pub fn validate_status(&self) -> bool {
        self.parameter(c::VALIDATE_STATUS) != 0
    }

    pub fn delete_status(&self) -> bool {
        self.parameter(c::DELETE_STATUS) != 0
    }

    pub fn info_log(&self) -> String {
        let capacity = self.parameter(c::INFO_LOG_LENGTH);
        read_string(capacity, |size, length, out| {
            self.context()
                .gl(|gl| unsafe { gl.GetProgramInfoLog(self.handle(), size, length, out) })
        })
    }

    /// Make this the current program.
    pub fn use_program(&self) {
        trace!("use program {}", self.handle());
        self.context().gl(|gl| unsafe { gl.UseProgram(self.handle()) });
    }

    /// Bind attribute `name` to `index`; takes effect at the next link.
    pub fn bind_attrib_location(&self, index: u32, name: &str) -> Result<()> {
        let name = CString::new(name).map_err(|_| Error::InvalidName(name.to_owned()))?;
        self.context().gl(|gl| unsafe {
            gl.BindAttribLocation(self.handle(), index, name.as_ptr() as *const GLchar)
        });
        Ok(())
    }

    /// `None` if `name` is not an active attribute.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        let name = CString::new(name).ok()?;
        let location = self.context().gl(|gl| unsafe {
            gl.GetAttribLocation(self.handle(), name.as_ptr() as *const GLchar)
        });
        u32::try_from(location).ok()
    }

    /// `None` if `name` is not an active uniform.
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        let name = CString::new(name).ok()?;
        let location = self.context().gl(|gl| unsafe {
            gl.GetUniformLocation(self.handle(), name.as_ptr() as *const GLchar)
        });
        (location >= 0).then_some(UniformLocation(location))
    }

    pub fn active_attributes(&self) -> Result<Vec<ActiveVariable>> {
        let handle = self.handle();
        self.active_variables(
            c::ACTIVE_ATTRIBUTES,
            c::ACTIVE_ATTRIBUTE_MAX_LENGTH,
            |gl, index, (buf_size, length, size, ty, name)| unsafe {
                gl.GetActiveAttrib(handle, index, buf_size, length, size, ty, name)
            },
        )
    }

    pub fn active_uniforms(&self) -> Result<Vec<ActiveVariable>> {
        let handle = self.handle();
        self.active_variables(
            c::ACTIVE_UNIFORMS,
            c::ACTIVE_UNIFORM_MAX_LENGTH,
            |gl, index, (buf_size, length, size, ty, name)| unsafe {
                gl.GetActiveUniform(handle, index, buf_size, length, size, ty, name)
            },
        )
    }

    /// Read a float uniform. `N` should match the uniform's component count;
    /// missing components read as zero.
    pub fn uniform_f32<const N: usize>(&self, location: UniformLocation) -> [f32; N] {
        // Large enough for a mat4, the widest uniform type.
        let mut values = [0.0f32; 16];
        self.context().gl(|gl| unsafe {
            gl.GetUniformfv(self.handle(), location.0, values.as_mut_ptr())
        });
        std::array::from_fn(|i| values.get(i).copied().unwrap_or(0.0))
    }

    pub fn uniform_i32<const N: usize>(&self, location: UniformLocation) -> [i32; N] {
        let mut values = [0i32; 16];
        self.context().gl(|gl| unsafe {
            gl.GetUniformiv(self.handle(), location.0, values.as_mut_ptr())
        });
        std::array::from_fn(|i| values.get(i).copied().unwrap_or(0))
    }

    pub fn is_program(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsProgram(self.handle()) })
            != c::FALSE
    }

    fn parameter(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        self.context()
            .gl(|gl| unsafe { gl.GetProgramiv(self.handle(), pname, &mut value) });
        value
    }

    fn active_variables(
        &self,
        count_pname: GLenum,
        max_length_pname: GLenum,
        read: impl Fn(&dyn Gles2, GLuint, ActiveArgs),
    ) -> Result<Vec<ActiveVariable>> {
        let count = self.parameter(count_pname).max(0) as GLuint;
        let capacity = self.parameter(max_length_pname);
        (0..count)
            .map(|index| -> Result<ActiveVariable> {
                let mut size: GLint = 0;
                let mut ty: GLenum = 0;
                let name = read_string(capacity, |buf_size, length, out| {
                    let args: ActiveArgs = (buf_size, length, &mut size, &mut ty, out);
                    self.context().gl(|gl| read(gl, index, args))
                });
                Ok(ActiveVariable {
                    name,
                    size,
                    ty: VariableType::try_from_gl(ty)?,
                })
            })
            .collect()
    }
}

/// Out-parameters of `glGetActiveAttrib` and `glGetActiveUniform`.
type ActiveArgs = (GLsizei, *mut GLsizei, *mut GLint, *mut GLenum, *mut GLchar);

impl Context {
    pub fn current_program(&self) -> Option<Program> {
        let handle = self.get_integer(c::CURRENT_PROGRAM) as GLuint;
        Program::lookup(self, handle)
    }

    pub fn use_no_program(&self) {
        trace!("use no program");
        self.gl(|gl| unsafe { gl.UseProgram(0) });
    }

    // Uniforms of the current program

    pub fn uniform_1f(&self, location: UniformLocation, x: f32) {
        self.gl(|gl| unsafe { gl.Uniform1f(location.0, x) });
    }

    pub fn uniform_2f(&self, location: UniformLocation, x: f32, y: f32) {
        self.gl(|gl| unsafe { gl.Uniform2f(location.0, x, y) });
    }

    pub fn uniform_3f(&self, location: UniformLocation, x: f32, y: f32, z: f32) {
        self.gl(|gl| unsafe { gl.Uniform3f(location.0, x, y, z) });
    }

    pub fn uniform_4f(&self, location: UniformLocation, x: f32, y: f32, z: f32, w: f32) {
        self.gl(|gl| unsafe { gl.Uniform4f(location.0, x, y, z, w) });
    }

    pub fn uniform_1i(&self, location: UniformLocation, x: i32) {
        self.gl(|gl| unsafe { gl.Uniform1i(location.0, x) });
    }

    pub fn uniform_2i(&self, location: UniformLocation, x: i32, y: i32) {
        self.gl(|gl| unsafe { gl.Uniform2i(location.0, x, y) });
    }

    pub fn uniform_3i(&self, location: UniformLocation, x: i32, y: i32, z: i32) {
        self.gl(|gl| unsafe { gl.Uniform3i(location.0, x, y, z) });
    }

    pub fn uniform_4i(&self, location: UniformLocation, x: i32, y: i32, z: i32, w: i32) {
        self.gl(|gl| unsafe { gl.Uniform4i(location.0, x, y, z, w) });
    }

    pub fn uniform_1fv(&self, location: UniformLocation, values: &[f32]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform1fv(location.0, count, values.as_ptr()) });
    }

    pub fn uniform_2fv(&self, location: UniformLocation, values: &[[f32; 2]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform2fv(location.0, count, values.as_ptr().cast()) });
    }

    pub fn uniform_3fv(&self, location: UniformLocation, values: &[[f32; 3]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform3fv(location.0, count, values.as_ptr().cast()) });
    }

    pub fn uniform_4fv(&self, location: UniformLocation, values: &[[f32; 4]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform4fv(location.0, count, values.as_ptr().cast()) });
    }

    pub fn uniform_1iv(&self, location: UniformLocation, values: &[i32]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform1iv(location.0, count, values.as_ptr()) });
    }

    pub fn uniform_2iv(&self, location: UniformLocation, values: &[[i32; 2]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform2iv(location.0, count, values.as_ptr().cast()) });
    }

    pub fn uniform_3iv(&self, location: UniformLocation, values: &[[i32; 3]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform3iv(location.0, count, values.as_ptr().cast()) });
    }

    pub fn uniform_4iv(&self, location: UniformLocation, values: &[[i32; 4]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe { gl.Uniform4iv(location.0, count, values.as_ptr().cast()) });
    }

    /// Column-major matrices. ES 2.0 has no transposed upload.
    pub fn uniform_matrix_2fv(&self, location: UniformLocation, values: &[[f32; 4]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe {
            gl.UniformMatrix2fv(location.0, count, c::FALSE, values.as_ptr().cast())
        });
    }

    pub fn uniform_matrix_3fv(&self, location: UniformLocation, values: &[[f32; 9]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe {
            gl.UniformMatrix3fv(location.0, count, c::FALSE, values.as_ptr().cast())
        });
    }

    pub fn uniform_matrix_4fv(&self, location: UniformLocation, values: &[[f32; 16]]) {
        let count = values.len() as GLsizei;
        self.gl(|gl| unsafe {
            gl.UniformMatrix4fv(location.0, count, c::FALSE, values.as_ptr().cast())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;
    use oogles_core::ShaderType;

    fn shaders(ctx: &Context) -> (Shader, Shader) {
        let vs = Shader::compiled(ctx, ShaderType::Vertex, "void main() {}").unwrap();
        let fs = Shader::compiled(ctx, ShaderType::Fragment, "void main() {}").unwrap();
        (vs, fs)
    }

    #[test]
    fn creation_failure_is_reported() {
        let (ctx, driver) = mock_context();
        driver.fail_generation(true);

        assert!(matches!(
            Program::new(&ctx),
            Err(Error::CreationFailed(ObjectKind::Program))
        ));
        assert_eq!(driver.calls_to("CreateProgram"), vec!["CreateProgram() -> 0"]);
        assert_eq!(ctx.live_objects(ObjectKind::Program), 0);
    }

    #[test]
    fn reused_names_resolve_to_the_live_wrapper() {
        let (ctx, driver) = mock_context();
        driver.reuse_names(true);

        let old_program = Program::new(&ctx).unwrap();
        let old_shader = Shader::new(&ctx, ShaderType::Vertex).unwrap();
        let (program_name, shader_name) = (old_program.handle(), old_shader.handle());
        old_shader.delete();
        old_program.delete();

        let program = Program::new(&ctx).unwrap();
        let shader = Shader::new(&ctx, ShaderType::Vertex).unwrap();
        assert_eq!(shader.handle(), shader_name);
        assert_eq!(program.handle(), program_name);

        program.attach(&shader);
        program.use_program();
        assert_eq!(ctx.current_program(), Some(program.clone()));
        assert_ne!(ctx.current_program(), Some(old_program));
        assert_eq!(program.attached_shaders(), vec![shader.clone()]);
        assert_ne!(program.attached_shaders(), vec![old_shader]);
    }

    #[test]
    fn attached_shaders_are_the_same_instances() {
        let (ctx, _driver) = mock_context();
        let (vs, fs) = shaders(&ctx);
        let program = Program::linked(&ctx, &[&vs, &fs]).unwrap();

        assert_eq!(program.attached_shaders(), vec![vs.clone(), fs.clone()]);

        program.detach(&vs);
        assert_eq!(program.attached_shaders(), vec![fs]);
    }

    #[test]
    fn link_failure_returns_the_log() {
        let (ctx, driver) = mock_context();
        let (vs, fs) = shaders(&ctx);
        driver.fail_link(true);

        match Program::linked(&ctx, &[&vs, &fs]) {
            Err(Error::Link(log)) => assert_eq!(log, "link failed"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(ctx.live_objects(ObjectKind::Program), 0);
    }

    #[test]
    fn current_program_is_recovered() {
        let (ctx, _driver) = mock_context();
        let program = Program::new(&ctx).unwrap();
        assert_eq!(ctx.current_program(), None);

        program.use_program();
        assert_eq!(ctx.current_program(), Some(program.clone()));

        ctx.use_no_program();
        assert_eq!(ctx.current_program(), None);
    }

    #[test]
    fn locations_report_missing_names_as_none() {
        let (ctx, driver) = mock_context();
        let program = Program::new(&ctx).unwrap();
        driver.set_uniform_location(program.handle(), "u_color", 3);

        assert_eq!(program.uniform_location("u_color").map(UniformLocation::raw), Some(3));
        assert_eq!(program.uniform_location("u_missing"), None);
        assert_eq!(program.uniform_location("bad\0name"), None);
        assert_eq!(program.attrib_location("a_pos"), None);

        program.bind_attrib_location(2, "a_pos").unwrap();
        assert_eq!(program.attrib_location("a_pos"), Some(2));
    }

    #[test]
    fn interior_nul_names_cannot_be_bound() {
        let (ctx, driver) = mock_context();
        let program = Program::new(&ctx).unwrap();

        assert!(matches!(
            program.bind_attrib_location(0, "a\0b"),
            Err(Error::InvalidName(_))
        ));
        assert!(driver.calls_to("BindAttribLocation").is_empty());
    }

    #[test]
    fn active_variables_are_typed() {
        let (ctx, driver) = mock_context();
        let program = Program::new(&ctx).unwrap();
        driver.add_active_attribute(program.handle(), "a_position", 1, c::FLOAT_VEC3);
        driver.add_active_uniform(program.handle(), "u_mvp", 1, c::FLOAT_MAT4);
        driver.add_active_uniform(program.handle(), "u_lights", 4, c::FLOAT_VEC4);

        assert_eq!(
            program.active_attributes().unwrap(),
            vec![ActiveVariable {
                name: "a_position".to_owned(),
                size: 1,
                ty: VariableType::FloatVec3,
            }]
        );
        let uniforms = program.active_uniforms().unwrap();
        assert_eq!(uniforms.len(), 2);
        assert_eq!(uniforms[1].name, "u_lights");
        assert_eq!(uniforms[1].size, 4);
        assert_eq!(uniforms[0].ty, VariableType::FloatMat4);
    }

    #[test]
    fn uniform_values_read_back() {
        let (ctx, driver) = mock_context();
        let program = Program::new(&ctx).unwrap();
        driver.set_uniform_location(program.handle(), "u_tint", 1);
        driver.set_uniform_location(program.handle(), "u_count", 2);
        let tint = program.uniform_location("u_tint").unwrap();
        let count = program.uniform_location("u_count").unwrap();

        program.use_program();
        ctx.uniform_4f(tint, 0.5, 0.25, 1.0, 1.0);
        ctx.uniform_1i(count, 7);

        assert_eq!(program.uniform_f32::<4>(tint), [0.5, 0.25, 1.0, 1.0]);
        assert_eq!(program.uniform_i32::<1>(count), [7]);
    }

    #[test]
    fn vector_uniforms_pass_element_counts() {
        let (ctx, driver) = mock_context();
        let location = UniformLocation(4);

        ctx.uniform_2fv(location, &[[1.0, 2.0], [3.0, 4.0]]);
        ctx.uniform_matrix_2fv(location, &[[1.0, 0.0, 0.0, 1.0]]);

        assert_eq!(
            driver.calls_to("Uniform2fv"),
            vec!["Uniform2fv(4, 2, [1.0, 2.0, 3.0, 4.0])"]
        );
        assert_eq!(
            driver.calls_to("UniformMatrix2fv"),
            vec!["UniformMatrix2fv(4, 1, 0, [1.0, 0.0, 0.0, 1.0])"]
        );
    }

    #[test]
    fn validation_follows_link_status() {
        let (ctx, _driver) = mock_context();
        let (vs, fs) = shaders(&ctx);
        let program = Program::linked(&ctx, &[&vs, &fs]).unwrap();

        program.validate();
        assert!(program.validate_status());
        assert!(program.is_program());
        assert!(!program.delete_status());
    }
}
