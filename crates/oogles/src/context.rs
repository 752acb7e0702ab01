//! The [`Context`]: the driver, the handle registries and global GL state.

use std::fmt;
use std::panic::Location;
use std::rc::Rc;

use gl::types::*;
use once_cell::unsync::OnceCell;
use oogles_core::consts as c;
use oogles_core::{
    Capability, Error, ErrorCode, GlEnum, Gles2, HintMode, HintTarget, ObjectKind, Result,
    StringName,
};
use tracing::{debug, trace, warn};

use crate::buffer::BufferKind;
use crate::framebuffer::FramebufferKind;
use crate::object::Object;
use crate::program::ProgramKind;
use crate::registry::Registry;
use crate::renderbuffer::RenderbufferKind;
use crate::shader::ShaderKind;
use crate::texture::TextureKind;

const DEFAULT_MAX_DRAINED_ERRORS: usize = 16;

/// Runtime switches for a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextOptions {
    /// Drain and log pending driver errors after every forwarded call.
    pub check_errors: bool,
    /// Upper bound on error flags collected in one drain. Some drivers keep
    /// reporting an error after context loss, which would otherwise spin
    /// forever.
    pub max_drained_errors: usize,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            check_errors: false,
            max_drained_errors: DEFAULT_MAX_DRAINED_ERRORS,
        }
    }
}

impl ContextOptions {
    /// Defaults overridden by `OOGLES_CHECK_ERRORS` (`1`, `true`, `yes` or
    /// `on`) and `OOGLES_MAX_DRAINED_ERRORS`.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(value) = std::env::var("OOGLES_CHECK_ERRORS") {
            options.check_errors = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Ok(value) = std::env::var("OOGLES_MAX_DRAINED_ERRORS") {
            match value.trim().parse::<usize>() {
                Ok(max) if max > 0 => options.max_drained_errors = max,
                _ => warn!("ignoring OOGLES_MAX_DRAINED_ERRORS={value:?}"),
            }
        }
        options
    }
}

/// Implementation limits reported by `glGetIntegerv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_texture_size: i32,
    pub max_cube_map_texture_size: i32,
    pub max_renderbuffer_size: i32,
    pub max_viewport_dims: [i32; 2],
    pub max_vertex_attribs: i32,
    pub max_vertex_uniform_vectors: i32,
    pub max_varying_vectors: i32,
    pub max_fragment_uniform_vectors: i32,
    pub max_texture_image_units: i32,
    pub max_vertex_texture_image_units: i32,
    pub max_combined_texture_image_units: i32,
}

impl Limits {
    fn query(ctx: &Context) -> Self {
        Self {
            max_texture_size: ctx.get_integer(c::MAX_TEXTURE_SIZE),
            max_cube_map_texture_size: ctx.get_integer(c::MAX_CUBE_MAP_TEXTURE_SIZE),
            max_renderbuffer_size: ctx.get_integer(c::MAX_RENDERBUFFER_SIZE),
            max_viewport_dims: ctx.get_integers(c::MAX_VIEWPORT_DIMS),
            max_vertex_attribs: ctx.get_integer(c::MAX_VERTEX_ATTRIBS),
            max_vertex_uniform_vectors: ctx.get_integer(c::MAX_VERTEX_UNIFORM_VECTORS),
            max_varying_vectors: ctx.get_integer(c::MAX_VARYING_VECTORS),
            max_fragment_uniform_vectors: ctx.get_integer(c::MAX_FRAGMENT_UNIFORM_VECTORS),
            max_texture_image_units: ctx.get_integer(c::MAX_TEXTURE_IMAGE_UNITS),
            max_vertex_texture_image_units: ctx.get_integer(c::MAX_VERTEX_TEXTURE_IMAGE_UNITS),
            max_combined_texture_image_units: ctx
                .get_integer(c::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
        }
    }
}

pub(crate) struct ContextInner {
    driver: Box<dyn Gles2>,
    options: ContextOptions,
    pub(crate) buffers: Registry<Object<BufferKind>>,
    pub(crate) textures: Registry<Object<TextureKind>>,
    pub(crate) framebuffers: Registry<Object<FramebufferKind>>,
    pub(crate) renderbuffers: Registry<Object<RenderbufferKind>>,
    pub(crate) shaders: Registry<Object<ShaderKind>>,
    pub(crate) programs: Registry<Object<ProgramKind>>,
    extensions: OnceCell<Vec<String>>,
    limits: OnceCell<Limits>,
}

/// A GL context as seen through a [`Gles2`] driver.
///
/// Cloning is cheap and yields the same context. Objects created from a
/// context keep it alive.
#[derive(Clone)]
pub struct Context {
    pub(crate) inner: Rc<ContextInner>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Wrap `driver` with options from the environment.
    ///
    /// # Safety
    /// The GL context `driver` talks to must be current on this thread
    /// whenever this `Context`, or any object created from it, is used or
    /// dropped.
    pub unsafe fn new(driver: impl Gles2 + 'static) -> Self {
        Self::with_options(driver, ContextOptions::from_env())
    }

    /// # Safety
    /// See [`Context::new`].
    pub unsafe fn with_options(driver: impl Gles2 + 'static, options: ContextOptions) -> Self {
        let description = unsafe { driver.description() };
        debug!("new context on {description} with {options:?}");
        Self {
            inner: Rc::new(ContextInner {
                driver: Box::new(driver),
                options,
                buffers: Registry::default(),
                textures: Registry::default(),
                framebuffers: Registry::default(),
                renderbuffers: Registry::default(),
                shaders: Registry::default(),
                programs: Registry::default(),
                extensions: OnceCell::new(),
                limits: OnceCell::new(),
            }),
        }
    }

    /// The raw driver, for entry points this crate does not wrap.
    pub fn driver(&self) -> &dyn Gles2 {
        self.inner.driver.as_ref()
    }

    pub fn options(&self) -> &ContextOptions {
        &self.inner.options
    }

    /// Run one driver call. With error checking on, pending errors are
    /// drained afterwards and logged against the calling location.
    #[track_caller]
    pub(crate) fn gl<R>(&self, f: impl FnOnce(&dyn Gles2) -> R) -> R {
        let result = f(self.inner.driver.as_ref());
        if self.inner.options.check_errors {
            let caller = Location::caller();
            for code in self.drain_errors() {
                warn!(%caller, "GL error {code:?}");
            }
        }
        result
    }

    pub(crate) fn get_integer(&self, pname: GLenum) -> GLint {
        let mut value = 0;
        self.gl(|gl| unsafe { gl.GetIntegerv(pname, &mut value) });
        value
    }

    pub(crate) fn get_integers<const N: usize>(&self, pname: GLenum) -> [GLint; N] {
        let mut values = [0; N];
        self.gl(|gl| unsafe { gl.GetIntegerv(pname, values.as_mut_ptr()) });
        values
    }

    pub(crate) fn get_floats<const N: usize>(&self, pname: GLenum) -> [GLfloat; N] {
        let mut values = [0.0; N];
        self.gl(|gl| unsafe { gl.GetFloatv(pname, values.as_mut_ptr()) });
        values
    }

    pub(crate) fn get_boolean(&self, pname: GLenum) -> bool {
        let mut value = c::FALSE;
        self.gl(|gl| unsafe { gl.GetBooleanv(pname, &mut value) });
        value != c::FALSE
    }

    /// A token list whose length is reported by `count_pname`.
    pub(crate) fn get_token_list(&self, count_pname: GLenum, pname: GLenum) -> Vec<GLenum> {
        let count = self.get_integer(count_pname);
        if count <= 0 {
            return Vec::new();
        }
        let mut values: Vec<GLint> = vec![0; count as usize];
        self.gl(|gl| unsafe { gl.GetIntegerv(pname, values.as_mut_ptr()) });
        values.into_iter().map(|v| v as GLenum).collect()
    }

    // Capabilities

    pub fn enable(&self, cap: Capability) {
        self.gl(|gl| unsafe { gl.Enable(cap.to_gl()) });
    }

    pub fn disable(&self, cap: Capability) {
        self.gl(|gl| unsafe { gl.Disable(cap.to_gl()) });
    }

    pub fn is_enabled(&self, cap: Capability) -> bool {
        self.gl(|gl| unsafe { gl.IsEnabled(cap.to_gl()) }) != c::FALSE
    }

    // Errors

    fn raw_error(&self) -> GLenum {
        unsafe { self.inner.driver.GetError() }
    }

    /// The oldest pending error flag, clearing it.
    pub fn error(&self) -> Option<ErrorCode> {
        match self.raw_error() {
            c::NO_ERROR => None,
            code => {
                let error = ErrorCode::from_gl(code);
                if error.is_none() {
                    warn!("driver reported unknown error {code:#06x}");
                }
                error
            }
        }
    }

    /// Every pending error flag in the order the driver reports them, up to
    /// [`ContextOptions::max_drained_errors`].
    ///
    /// Once the cap is reached one more flag is read to tell an exactly full
    /// queue from an overflowing one; that flag is discarded.
    pub fn drain_errors(&self) -> Vec<ErrorCode> {
        let max = self.inner.options.max_drained_errors;
        let mut errors = Vec::new();
        for _ in 0..max {
            match self.raw_error() {
                c::NO_ERROR => return errors,
                code => match ErrorCode::from_gl(code) {
                    Some(error) => errors.push(error),
                    None => warn!("driver reported unknown error {code:#06x}"),
                },
            }
        }
        if self.raw_error() != c::NO_ERROR {
            warn!("GL errors still pending after draining {max}");
        }
        errors
    }

    /// Drain pending errors, failing if there were any.
    pub fn check_errors(&self) -> Result<()> {
        let errors = self.drain_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Driver(errors))
        }
    }

    // Strings and limits

    pub fn string(&self, name: StringName) -> Option<String> {
        let ptr = self.gl(|gl| unsafe { gl.GetString(name.to_gl()) });
        if ptr.is_null() {
            return None;
        }
        // SAFETY: a non-null GetString result is a static NUL-terminated string.
        let value = unsafe { std::ffi::CStr::from_ptr(ptr as *const _) };
        Some(value.to_string_lossy().into_owned())
    }

    /// Extension names, queried once.
    pub fn extensions(&self) -> &[String] {
        self.inner.extensions.get_or_init(|| {
            let list = self.string(StringName::Extensions).unwrap_or_default();
            let extensions: Vec<String> = list.split_whitespace().map(str::to_owned).collect();
            debug!("{} GL extensions", extensions.len());
            extensions
        })
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions().iter().any(|ext| ext == name)
    }

    /// Implementation limits, queried once.
    pub fn limits(&self) -> &Limits {
        self.inner.limits.get_or_init(|| Limits::query(self))
    }

    pub fn hint(&self, target: HintTarget, mode: HintMode) {
        self.gl(|gl| unsafe { gl.Hint(target.to_gl(), mode.to_gl()) });
    }

    pub fn flush(&self) {
        self.gl(|gl| unsafe { gl.Flush() });
    }

    pub fn finish(&self) {
        self.gl(|gl| unsafe { gl.Finish() });
    }

    /// Number of live wrappers of `kind` created through this context.
    pub fn live_objects(&self, kind: ObjectKind) -> usize {
        let inner = &self.inner;
        match kind {
            ObjectKind::Buffer => inner.buffers.len(),
            ObjectKind::Texture => inner.textures.len(),
            ObjectKind::Framebuffer => inner.framebuffers.len(),
            ObjectKind::Renderbuffer => inner.renderbuffers.len(),
            ObjectKind::Shader => inner.shaders.len(),
            ObjectKind::Program => inner.programs.len(),
        }
    }

    // State save/restore

    /// Put bindings back to their defaults: no program, no texture on any
    /// unit, unit 0 active, no buffers, the default framebuffer and
    /// renderbuffer, and blending off with `ONE, ZERO`.
    pub fn reset_state(&self) {
        trace!("resetting GL state");
        let units = self.limits().max_combined_texture_image_units.max(1) as GLuint;
        self.gl(|gl| unsafe {
            gl.UseProgram(0);

            for target in [c::TEXTURE_2D, c::TEXTURE_CUBE_MAP] {
                for unit in 0..units {
                    gl.ActiveTexture(c::TEXTURE0 + unit);
                    gl.BindTexture(target, 0);
                }
            }
            gl.ActiveTexture(c::TEXTURE0);

            gl.BindBuffer(c::ARRAY_BUFFER, 0);
            gl.BindBuffer(c::ELEMENT_ARRAY_BUFFER, 0);
            gl.Disable(c::BLEND);
            gl.BlendFunc(c::ONE, c::ZERO);

            gl.BindFramebuffer(c::FRAMEBUFFER, 0);
            gl.BindRenderbuffer(c::RENDERBUFFER, 0);
        });
    }

    /// Record the bindings [`SavedState::restore`] puts back.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            array_buffer: self.get_integer(c::ARRAY_BUFFER_BINDING) as GLuint,
            element_array_buffer: self.get_integer(c::ELEMENT_ARRAY_BUFFER_BINDING) as GLuint,
            framebuffer: self.get_integer(c::FRAMEBUFFER_BINDING) as GLuint,
            renderbuffer: self.get_integer(c::RENDERBUFFER_BINDING) as GLuint,
            active_texture: self.get_integer(c::ACTIVE_TEXTURE) as GLenum,
            texture_2d: self.get_integer(c::TEXTURE_BINDING_2D) as GLuint,
            program: self.get_integer(c::CURRENT_PROGRAM) as GLuint,
            viewport: self.get_integers(c::VIEWPORT),
        }
    }
}

/// Bindings captured by [`Context::save_state`], as raw handles.
///
/// Restoring a handle whose object was deleted in the meantime is a driver
/// error, so keep the saved objects alive until the restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    array_buffer: GLuint,
    element_array_buffer: GLuint,
    framebuffer: GLuint,
    renderbuffer: GLuint,
    active_texture: GLenum,
    texture_2d: GLuint,
    program: GLuint,
    viewport: [GLint; 4],
}

impl SavedState {
    pub fn restore(&self, ctx: &Context) {
        trace!("restoring GL state {self:?}");
        ctx.gl(|gl| unsafe {
            gl.BindBuffer(c::ARRAY_BUFFER, self.array_buffer);
            gl.BindBuffer(c::ELEMENT_ARRAY_BUFFER, self.element_array_buffer);
            gl.BindFramebuffer(c::FRAMEBUFFER, self.framebuffer);
            gl.BindRenderbuffer(c::RENDERBUFFER, self.renderbuffer);
            gl.ActiveTexture(self.active_texture);
            gl.BindTexture(c::TEXTURE_2D, self.texture_2d);
            gl.UseProgram(self.program);
            gl.Viewport(
                self.viewport[0],
                self.viewport[1],
                self.viewport[2],
                self.viewport[3],
            );
        });
    }
}

/// Read a driver string of at most `capacity` bytes including the NUL, as
/// info logs and shader sources are reported.
pub(crate) fn read_string(
    capacity: GLint,
    read: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
) -> String {
    if capacity <= 0 {
        return String::new();
    }
    let mut buf = vec![0u8; capacity as usize];
    let mut length: GLsizei = 0;
    read(capacity, &mut length, buf.as_mut_ptr() as *mut GLchar);
    buf.truncate(length.clamp(0, capacity) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use oogles_core::mock::RecordingDriver;

    /// A context over a fresh recording driver, plus a handle on the driver.
    pub(crate) fn mock_context() -> (Context, RecordingDriver) {
        let driver = RecordingDriver::new();
        let ctx = unsafe { Context::with_options(driver.clone(), ContextOptions::default()) };
        (ctx, driver)
    }

    #[test]
    fn drain_returns_queued_errors_in_order() {
        let (ctx, driver) = mock_context();
        driver.push_error(c::INVALID_ENUM);
        driver.push_error(c::OUT_OF_MEMORY);

        assert_eq!(
            ctx.drain_errors(),
            vec![ErrorCode::InvalidEnum, ErrorCode::OutOfMemory]
        );
        // Two flags plus the NO_ERROR that ends the loop.
        assert_eq!(driver.calls_to("GetError").len(), 3);
        assert!(ctx.drain_errors().is_empty());
    }

    #[test]
    fn drain_is_bounded() {
        let driver = RecordingDriver::new();
        let options = ContextOptions {
            max_drained_errors: 2,
            ..ContextOptions::default()
        };
        let ctx = unsafe { Context::with_options(driver.clone(), options) };
        for _ in 0..5 {
            driver.push_error(c::INVALID_VALUE);
        }

        assert_eq!(ctx.drain_errors().len(), 2);
        // The cap plus the read that finds the queue still non-empty.
        assert_eq!(driver.calls_to("GetError").len(), 3);
    }

    /// Run `f` with a subscriber that captures formatted events as text.
    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || LogSink(sink.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn overflow_warning_needs_a_flag_past_the_cap() {
        let driver = RecordingDriver::new();
        let options = ContextOptions {
            max_drained_errors: 2,
            ..ContextOptions::default()
        };
        let ctx = unsafe { Context::with_options(driver.clone(), options) };

        driver.push_error(c::INVALID_VALUE);
        driver.push_error(c::INVALID_VALUE);
        let logs = captured_logs(|| assert_eq!(ctx.drain_errors().len(), 2));
        assert!(!logs.contains("still pending"), "{logs}");

        for _ in 0..3 {
            driver.push_error(c::INVALID_VALUE);
        }
        let logs = captured_logs(|| assert_eq!(ctx.drain_errors().len(), 2));
        assert!(logs.contains("GL errors still pending after draining 2"), "{logs}");
    }

    #[test]
    fn check_errors_reports_driver_errors() {
        let (ctx, driver) = mock_context();
        assert!(ctx.check_errors().is_ok());

        driver.push_error(c::INVALID_OPERATION);
        match ctx.check_errors() {
            Err(Error::Driver(codes)) => assert_eq!(codes, vec![ErrorCode::InvalidOperation]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn error_reads_a_single_flag() {
        let (ctx, driver) = mock_context();
        driver.push_error(c::INVALID_VALUE);
        driver.push_error(c::INVALID_ENUM);

        assert_eq!(ctx.error(), Some(ErrorCode::InvalidValue));
        assert_eq!(ctx.error(), Some(ErrorCode::InvalidEnum));
        assert_eq!(ctx.error(), None);
    }

    #[test]
    fn checked_calls_drain_after_each_forward() {
        let driver = RecordingDriver::new();
        let options = ContextOptions {
            check_errors: true,
            ..ContextOptions::default()
        };
        let ctx = unsafe { Context::with_options(driver.clone(), options) };
        driver.push_error(c::INVALID_ENUM);

        ctx.enable(Capability::Blend);

        assert_eq!(
            driver.take_calls(),
            vec!["Enable(0x0be2)", "GetError()", "GetError()"]
        );
        assert!(ctx.drain_errors().is_empty());
    }

    #[test]
    fn capabilities_forward_their_tokens() {
        let (ctx, driver) = mock_context();
        ctx.enable(Capability::DepthTest);
        assert!(ctx.is_enabled(Capability::DepthTest));
        ctx.disable(Capability::DepthTest);
        assert!(!ctx.is_enabled(Capability::DepthTest));

        assert_eq!(driver.calls_to("Enable"), vec!["Enable(0x0b71)"]);
        assert_eq!(driver.calls_to("Disable"), vec!["Disable(0x0b71)"]);
    }

    #[test]
    fn extensions_are_split_and_cached() {
        let (ctx, driver) = mock_context();
        driver.set_string(c::EXTENSIONS, "GL_OES_depth24 GL_OES_texture_npot ");

        assert_eq!(ctx.extensions(), ["GL_OES_depth24", "GL_OES_texture_npot"]);
        assert!(ctx.has_extension("GL_OES_texture_npot"));
        assert!(!ctx.has_extension("GL_OES_depth"));
        assert_eq!(driver.calls_to("GetString").len(), 1);
    }

    #[test]
    fn missing_strings_are_none() {
        let (ctx, driver) = mock_context();
        driver.set_string(c::VENDOR, "Acme");

        assert_eq!(ctx.string(StringName::Vendor).as_deref(), Some("Acme"));
        assert_eq!(ctx.string(StringName::Renderer), None);
    }

    #[test]
    fn limits_are_queried_once() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::MAX_TEXTURE_SIZE, &[4096]);
        driver.set_integer(c::MAX_VIEWPORT_DIMS, &[8192, 4096]);

        assert_eq!(ctx.limits().max_texture_size, 4096);
        assert_eq!(ctx.limits().max_viewport_dims, [8192, 4096]);
        assert_eq!(
            driver
                .calls_to("GetIntegerv")
                .iter()
                .filter(|call| call.contains("0x0d33"))
                .count(),
            1
        );
    }

    #[test]
    fn reset_unbinds_every_texture_unit() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::MAX_COMBINED_TEXTURE_IMAGE_UNITS, &[2]);
        ctx.limits();
        driver.take_calls();

        ctx.reset_state();

        let calls = driver.take_calls();
        assert_eq!(calls.iter().filter(|c| c.starts_with("BindTexture(")).count(), 4);
        assert_eq!(calls[0], "UseProgram(0)");
        assert!(calls.contains(&"ActiveTexture(0x84c1)".to_owned()));
        assert!(calls.contains(&"BlendFunc(0x0001, 0x0000)".to_owned()));
        assert_eq!(calls.last().map(String::as_str), Some("BindRenderbuffer(0x8d41, 0)"));
    }

    #[test]
    fn saved_state_restores_bindings() {
        let (ctx, driver) = mock_context();
        driver.set_integer(c::ARRAY_BUFFER_BINDING, &[4]);
        driver.set_integer(c::ACTIVE_TEXTURE, &[c::TEXTURE0 as GLint + 3]);
        driver.set_integer(c::VIEWPORT, &[0, 0, 640, 480]);

        let saved = ctx.save_state();
        driver.take_calls();
        saved.restore(&ctx);

        let calls = driver.take_calls();
        assert_eq!(calls[0], "BindBuffer(0x8892, 4)");
        assert!(calls.contains(&"ActiveTexture(0x84c3)".to_owned()));
        assert_eq!(calls.last().map(String::as_str), Some("Viewport(0, 0, 640, 480)"));
    }

    #[test]
    fn read_string_truncates_to_reported_length() {
        let text = read_string(8, |size, length, out| unsafe {
            assert_eq!(size, 8);
            for (i, byte) in b"abc\0".iter().enumerate() {
                *out.add(i) = *byte as GLchar;
            }
            *length = 3;
        });
        assert_eq!(text, "abc");
        assert_eq!(read_string(0, |_, _, _| unreachable!()), "");
    }
}
