//! GLSL ES shader objects and compiler queries.

use std::ffi::c_void;

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use oogles_core::consts as c;
use oogles_core::{Error, GlEnum, Gles2, ObjectKind, PrecisionType, Result, ShaderType};
use tracing::{debug, warn};

use crate::context::{read_string, Context, ContextInner};
use crate::object::{object_wrapper, Kind, Object};
use crate::registry::Registry;

pub(crate) enum ShaderKind {}

impl Kind for ShaderKind {
    const KIND: ObjectKind = ObjectKind::Shader;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>> {
        &inner.shaders
    }

    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint) {
        gl.DeleteShader(handle);
    }
}

object_wrapper! {
    /// A vertex or fragment shader.
    Shader, ShaderKind
}

impl Shader {
    pub fn new(ctx: &Context, ty: ShaderType) -> Result<Self> {
        let handle = ctx.gl(|gl| unsafe { gl.CreateShader(ty.to_gl()) });
        Object::register(ctx, handle).map(Shader)
    }

    /// Create, source and compile a shader in one go. On failure the shader
    /// is deleted and the info log returned as [`Error::Compile`].
    pub fn compiled(ctx: &Context, ty: ShaderType, source: &str) -> Result<Self> {
        let shader = Self::new(ctx, ty)?;
        shader.set_source(source);
        shader.compile();
        if !shader.compile_status() {
            let log = shader.info_log();
            warn!("{ty:?} shader {} failed to compile: {log}", shader.handle());
            return Err(Error::Compile(log));
        }
        debug!("compiled {ty:?} shader {}", shader.handle());
        Ok(shader)
    }

    pub fn set_source(&self, source: &str) {
        self.set_sources(&[source]);
    }

    /// Replace the source with the concatenation of `sources`.
    pub fn set_sources(&self, sources: &[&str]) {
        let pointers: Vec<*const GLchar> = sources
            .iter()
            .map(|s| s.as_ptr() as *const GLchar)
            .collect();
        let lengths: Vec<GLint> = sources.iter().map(|s| s.len() as GLint).collect();
        self.context().gl(|gl| unsafe {
            gl.ShaderSource(
                self.handle(),
                sources.len() as GLsizei,
                pointers.as_ptr(),
                lengths.as_ptr(),
            )
        });
    }

    /// The source as last set, concatenated.
    pub fn source(&self) -> String {
        let capacity = self.parameter(c::SHADER_SOURCE_LENGTH);
        read_string(capacity, |size, length, out| {
            self.context()
                .gl(|gl| unsafe { gl.GetShaderSource(self.handle(), size, length, out) })
        })
    }

    pub fn compile(&self) {
        self.context().gl(|gl| unsafe { gl.CompileShader(self.handle()) });
    }

    pub fn compile_status(&self) -> bool {
        self.parameter(c::COMPILE_STATUS) != 0
    }

    /// Whether the shader is flagged for deletion while still attached.
    pub fn delete_status(&self) -> bool {
        self.parameter(c::DELETE_STATUS) != 0
    }

    pub fn info_log(&self) -> String {
        let capacity = self.parameter(c::INFO_LOG_LENGTH);
        read_string(capacity, |size, length, out| {
            self.context()
                .gl(|gl| unsafe { gl.GetShaderInfoLog(self.handle(), size, length, out) })
        })
    }

    pub fn shader_type(&self) -> Result<ShaderType> {
        ShaderType::try_from_gl(self.parameter(c::SHADER_TYPE) as GLenum)
    }

    pub fn is_shader(&self) -> bool {
        self.context()
            .gl(|gl| unsafe { gl.IsShader(self.handle()) })
            != c::FALSE
    }

    fn parameter(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        self.context()
            .gl(|gl| unsafe { gl.GetShaderiv(self.handle(), pname, &mut value) });
        value
    }
}

/// Range and precision of a shader numeric format, as log2 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionFormat {
    pub range_min: i32,
    pub range_max: i32,
    pub precision: i32,
}

impl Context {
    /// Hint that the compiler's resources may be freed.
    pub fn release_shader_compiler(&self) {
        self.gl(|gl| unsafe { gl.ReleaseShaderCompiler() });
    }

    pub fn shader_precision_format(
        &self,
        shader_type: ShaderType,
        precision: PrecisionType,
    ) -> PrecisionFormat {
        let mut range = [0; 2];
        let mut bits = 0;
        self.gl(|gl| unsafe {
            gl.GetShaderPrecisionFormat(
                shader_type.to_gl(),
                precision.to_gl(),
                range.as_mut_ptr(),
                &mut bits,
            )
        });
        PrecisionFormat {
            range_min: range[0],
            range_max: range[1],
            precision: bits,
        }
    }

    /// Load a precompiled binary into `shaders`. `format` must be one of
    /// [`Context::shader_binary_formats`].
    pub fn shader_binary(&self, shaders: &[&Shader], format: GLenum, binary: &[u8]) {
        let handles: Vec<GLuint> = shaders.iter().map(|s| s.handle()).collect();
        self.gl(|gl| unsafe {
            gl.ShaderBinary(
                handles.len() as GLsizei,
                handles.as_ptr(),
                format,
                binary.as_ptr() as *const c_void,
                binary.len() as GLsizei,
            )
        });
    }

    /// False on implementations that only accept shader binaries.
    pub fn has_shader_compiler(&self) -> bool {
        self.get_boolean(c::SHADER_COMPILER)
    }

    pub fn shader_binary_formats(&self) -> Vec<GLenum> {
        self.get_token_list(c::NUM_SHADER_BINARY_FORMATS, c::SHADER_BINARY_FORMATS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::mock_context;

    const VERTEX: &str = "attribute vec4 pos;\nvoid main() { gl_Position = pos; }\n";

    #[test]
    fn compiled_shaders_keep_their_source() {
        let (ctx, driver) = mock_context();
        let shader = Shader::compiled(&ctx, ShaderType::Vertex, VERTEX).unwrap();

        assert!(shader.compile_status());
        assert_eq!(shader.source(), VERTEX);
        assert_eq!(shader.shader_type().unwrap(), ShaderType::Vertex);
        assert_eq!(
            driver.calls_to("CreateShader"),
            vec![format!("CreateShader(0x8b31) -> {}", shader.handle())]
        );
    }

    #[test]
    fn split_sources_concatenate() {
        let (ctx, driver) = mock_context();
        let single = Shader::new(&ctx, ShaderType::Fragment).unwrap();
        let split = Shader::new(&ctx, ShaderType::Fragment).unwrap();

        single.set_source("precision mediump float;\nvoid main() {}\n");
        split.set_sources(&["precision mediump float;\n", "void main() {}\n"]);

        assert_eq!(single.source(), split.source());
        assert_eq!(
            driver.shader_source(split.handle()).as_deref(),
            Some("precision mediump float;\nvoid main() {}\n")
        );
    }

    #[test]
    fn compile_failure_returns_the_log_and_deletes() {
        let (ctx, driver) = mock_context();
        driver.fail_compile(true);

        match Shader::compiled(&ctx, ShaderType::Fragment, "void main() {") {
            Err(Error::Compile(log)) => assert_eq!(log, "0:1: syntax error"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(driver.calls_to("DeleteShader").len(), 1);
        assert_eq!(ctx.live_objects(ObjectKind::Shader), 0);
    }

    #[test]
    fn creation_failure_is_reported() {
        let (ctx, driver) = mock_context();
        driver.fail_generation(true);

        assert!(matches!(
            Shader::new(&ctx, ShaderType::Fragment),
            Err(Error::CreationFailed(ObjectKind::Shader))
        ));
        assert!(matches!(
            Shader::compiled(&ctx, ShaderType::Vertex, VERTEX),
            Err(Error::CreationFailed(ObjectKind::Shader))
        ));
        assert!(driver.calls_to("ShaderSource").is_empty());
        assert_eq!(ctx.live_objects(ObjectKind::Shader), 0);
    }

    #[test]
    fn empty_logs_read_as_empty_strings() {
        let (ctx, driver) = mock_context();
        let shader = Shader::new(&ctx, ShaderType::Vertex).unwrap();

        assert_eq!(shader.info_log(), "");
        assert!(driver.calls_to("GetShaderInfoLog").is_empty());
    }

    #[test]
    fn precision_formats_are_reported() {
        let (ctx, _driver) = mock_context();
        let format = ctx.shader_precision_format(ShaderType::Fragment, PrecisionType::HighFloat);

        assert_eq!(
            format,
            PrecisionFormat {
                range_min: 127,
                range_max: 127,
                precision: 23,
            }
        );
    }

    #[test]
    fn compiler_queries() {
        let (ctx, driver) = mock_context();
        assert!(!ctx.has_shader_compiler());
        driver.set_integer(c::SHADER_COMPILER, &[1]);
        assert!(ctx.has_shader_compiler());

        driver.set_integer(c::NUM_SHADER_BINARY_FORMATS, &[1]);
        driver.set_integer(c::SHADER_BINARY_FORMATS, &[0x9130]);
        assert_eq!(ctx.shader_binary_formats(), vec![0x9130]);

        ctx.release_shader_compiler();
        assert_eq!(driver.calls_to("ReleaseShaderCompiler").len(), 1);
    }

    #[test]
    fn binaries_name_every_target_shader() {
        let (ctx, driver) = mock_context();
        let vs = Shader::new(&ctx, ShaderType::Vertex).unwrap();
        let fs = Shader::new(&ctx, ShaderType::Fragment).unwrap();

        ctx.shader_binary(&[&vs, &fs], 0x9130, &[0xde, 0xad]);

        assert_eq!(
            driver.calls_to("ShaderBinary"),
            vec![format!(
                "ShaderBinary([{}, {}], 0x9130, [222, 173])",
                vs.handle(),
                fs.handle()
            )]
        );
    }
}
