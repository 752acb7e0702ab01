//! A [`Gles2`] implementation that records calls instead of rendering.
//!
//! Besides the call log it keeps just enough state to answer the queries the
//! wrapper makes: bindings, object parameters, shader sources, info logs and
//! active variables. Names come from one counter shared by every object kind,
//! so a name identifies its kind too.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::ffi::{c_void, CStr, CString};
use std::rc::Rc;

use gl::types::*;

use crate::consts as c;
use crate::driver::Gles2;

const BINDINGS: [GLenum; 6] = [
    c::ARRAY_BUFFER_BINDING,
    c::ELEMENT_ARRAY_BUFFER_BINDING,
    c::TEXTURE_BINDING_2D,
    c::TEXTURE_BINDING_CUBE_MAP,
    c::FRAMEBUFFER_BINDING,
    c::RENDERBUFFER_BINDING,
];

/// Initial values of context state the wrappers read back as enums.
const DEFAULT_STATE: &[(GLenum, GLint)] = &[
    (c::FRONT_FACE, c::CCW as GLint),
    (c::CULL_FACE_MODE, c::BACK as GLint),
];

#[derive(Default)]
struct MockState {
    calls: RefCell<Vec<String>>,
    next_name: Cell<GLuint>,
    fail_generation: Cell<bool>,
    fail_compile: Cell<bool>,
    fail_link: Cell<bool>,
    live: RefCell<HashMap<GLuint, &'static str>>,
    /// Generated names that have been bound, and so name an object.
    bound: RefCell<HashSet<GLuint>>,
    reuse_names: Cell<bool>,
    free_names: RefCell<Vec<GLuint>>,
    errors: RefCell<VecDeque<GLenum>>,
    enabled: RefCell<HashSet<GLenum>>,
    /// Integer state keyed by (object, target, attachment or index; pname).
    integers: RefCell<HashMap<(GLuint, GLenum), Vec<GLint>>>,
    floats: RefCell<HashMap<(GLuint, GLenum), Vec<GLfloat>>>,
    strings: RefCell<HashMap<GLenum, CString>>,
    sources: RefCell<HashMap<GLuint, String>>,
    info_logs: RefCell<HashMap<GLuint, String>>,
    attached: RefCell<HashMap<GLuint, Vec<GLuint>>>,
    attrib_locations: RefCell<HashMap<(GLuint, String), GLint>>,
    uniform_locations: RefCell<HashMap<(GLuint, String), GLint>>,
    active_attributes: RefCell<HashMap<GLuint, Vec<(String, GLint, GLenum)>>>,
    active_uniforms: RefCell<HashMap<GLuint, Vec<(String, GLint, GLenum)>>>,
    uniform_values: RefCell<HashMap<(GLuint, GLint), Vec<GLfloat>>>,
    attrib_pointers: RefCell<HashMap<GLuint, usize>>,
    framebuffer_status: Cell<Option<GLenum>>,
}

/// Recording driver. Clones share state, so a test can keep one clone while
/// the context owns another.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    state: Rc<MockState>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far, formatted as `Name(args)`.
    pub fn calls(&self) -> Vec<String> {
        self.state.calls.borrow().clone()
    }

    /// Calls to the entry point `name`, e.g. `"BindBuffer"`.
    pub fn calls_to(&self, name: &str) -> Vec<String> {
        let prefix = format!("{name}(");
        self.state
            .calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn take_calls(&self) -> Vec<String> {
        self.state.calls.take()
    }

    /// Make `Gen*` and `Create*` hand out the zero name.
    pub fn fail_generation(&self, fail: bool) {
        self.state.fail_generation.set(fail);
    }

    /// Hand deleted names out again, most recently deleted first, as real
    /// drivers may.
    pub fn reuse_names(&self, reuse: bool) {
        self.state.reuse_names.set(reuse);
    }

    pub fn fail_compile(&self, fail: bool) {
        self.state.fail_compile.set(fail);
    }

    pub fn fail_link(&self, fail: bool) {
        self.state.fail_link.set(fail);
    }

    /// Queue an error flag for `glGetError`.
    pub fn push_error(&self, error: GLenum) {
        self.state.errors.borrow_mut().push_back(error);
    }

    /// Set the answer for `glGetIntegerv(pname)`.
    pub fn set_integer(&self, pname: GLenum, values: &[GLint]) {
        self.set_param(0, pname, values);
    }

    /// Set the answer for a keyed integer query: the key is the object name
    /// for shader/program queries, the target for buffer, texture and
    /// renderbuffer queries, the attachment for framebuffer attachment
    /// queries and the index for vertex attribute queries.
    pub fn set_param(&self, key: GLuint, pname: GLenum, values: &[GLint]) {
        self.state
            .integers
            .borrow_mut()
            .insert((key, pname), values.to_vec());
    }

    pub fn set_float(&self, pname: GLenum, values: &[GLfloat]) {
        self.state
            .floats
            .borrow_mut()
            .insert((0, pname), values.to_vec());
    }

    pub fn set_string(&self, name: GLenum, value: &str) {
        let value = CString::new(value).expect("mock strings must not contain NUL");
        self.state.strings.borrow_mut().insert(name, value);
    }

    pub fn set_info_log(&self, object: GLuint, log: &str) {
        self.state
            .info_logs
            .borrow_mut()
            .insert(object, log.to_owned());
    }

    pub fn set_attrib_location(&self, program: GLuint, name: &str, location: GLint) {
        self.state
            .attrib_locations
            .borrow_mut()
            .insert((program, name.to_owned()), location);
    }

    pub fn set_uniform_location(&self, program: GLuint, name: &str, location: GLint) {
        self.state
            .uniform_locations
            .borrow_mut()
            .insert((program, name.to_owned()), location);
    }

    pub fn add_active_attribute(&self, program: GLuint, name: &str, size: GLint, type_: GLenum) {
        self.state
            .active_attributes
            .borrow_mut()
            .entry(program)
            .or_default()
            .push((name.to_owned(), size, type_));
    }

    pub fn add_active_uniform(&self, program: GLuint, name: &str, size: GLint, type_: GLenum) {
        self.state
            .active_uniforms
            .borrow_mut()
            .entry(program)
            .or_default()
            .push((name.to_owned(), size, type_));
    }

    pub fn set_framebuffer_status(&self, status: GLenum) {
        self.state.framebuffer_status.set(Some(status));
    }

    /// Whether `name` was generated and not yet deleted.
    pub fn is_live(&self, name: GLuint) -> bool {
        self.state.live.borrow().contains_key(&name)
    }

    pub fn live_count(&self) -> usize {
        self.state.live.borrow().len()
    }

    /// Shader source as last given to `glShaderSource`.
    pub fn shader_source(&self, shader: GLuint) -> Option<String> {
        self.state.sources.borrow().get(&shader).cloned()
    }

    fn record(&self, call: String) {
        self.state.calls.borrow_mut().push(call);
    }

    fn integer(&self, key: GLuint, pname: GLenum) -> GLint {
        self.integers(key, pname).first().copied().unwrap_or(0)
    }

    fn integers(&self, key: GLuint, pname: GLenum) -> Vec<GLint> {
        self.state
            .integers
            .borrow()
            .get(&(key, pname))
            .cloned()
            .or_else(|| {
                let default = DEFAULT_STATE.iter().find(|(p, _)| key == 0 && *p == pname);
                default.map(|&(_, value)| vec![value])
            })
            .unwrap_or_else(|| vec![0])
    }

    /// `Gen*` names only become objects on first bind; `Create*` names are
    /// objects straight away.
    fn is_kind(&self, name: GLuint, kind: &str) -> GLboolean {
        let live = self.state.live.borrow().get(&name) == Some(&kind);
        let created =
            matches!(kind, "shader" | "program") || self.state.bound.borrow().contains(&name);
        (live && created) as GLboolean
    }

    fn new_name(&self, kind: &'static str) -> GLuint {
        if self.state.fail_generation.get() {
            return 0;
        }
        let reused = if self.state.reuse_names.get() {
            self.state.free_names.borrow_mut().pop()
        } else {
            None
        };
        let name = reused.unwrap_or_else(|| {
            let name = self.state.next_name.get() + 1;
            self.state.next_name.set(name);
            name
        });
        self.state.live.borrow_mut().insert(name, kind);
        name
    }

    unsafe fn gen(&self, entry: &str, kind: &'static str, n: GLsizei, names: *mut GLuint) {
        let mut generated = Vec::new();
        for i in 0..n.max(0) as usize {
            let name = self.new_name(kind);
            *names.add(i) = name;
            generated.push(name);
        }
        self.record(format!("{entry}({n}) -> {generated:?}"));
    }

    unsafe fn delete(&self, entry: &str, n: GLsizei, names: *const GLuint) {
        let names = std::slice::from_raw_parts(names, n.max(0) as usize).to_vec();
        self.record(format!("{entry}({names:?})"));
        for name in names {
            self.forget(name);
        }
    }

    fn forget(&self, name: GLuint) {
        if name == 0 {
            return;
        }
        let Some(kind) = self.state.live.borrow_mut().remove(&name) else {
            return;
        };
        self.state.bound.borrow_mut().remove(&name);
        self.state.free_names.borrow_mut().push(name);
        let mut integers = self.state.integers.borrow_mut();
        if matches!(kind, "shader" | "program") {
            integers.retain(|&(key, _), _| key != name);
            self.state.sources.borrow_mut().remove(&name);
            self.state.info_logs.borrow_mut().remove(&name);
            self.state.attached.borrow_mut().remove(&name);
        }
        for binding in BINDINGS {
            if let Some(values) = integers.get_mut(&(0, binding)) {
                if values.first() == Some(&(name as GLint)) {
                    values[0] = 0;
                }
            }
        }
    }

    fn bind(&self, binding: GLenum, name: GLuint) {
        if self.state.live.borrow().contains_key(&name) {
            self.state.bound.borrow_mut().insert(name);
        }
        self.set_param(0, binding, &[name as GLint]);
    }

    unsafe fn write_string(
        value: &str,
        buf_size: GLsizei,
        length: *mut GLsizei,
        out: *mut GLchar,
    ) {
        if buf_size <= 0 {
            if !length.is_null() {
                *length = 0;
            }
            return;
        }
        let bytes = value.as_bytes();
        let written = bytes.len().min(buf_size as usize - 1);
        std::ptr::copy_nonoverlapping(bytes.as_ptr() as *const GLchar, out, written);
        *out.add(written) = 0;
        if !length.is_null() {
            *length = written as GLsizei;
        }
    }

    unsafe fn write_active(
        &self,
        list: &HashMap<GLuint, Vec<(String, GLint, GLenum)>>,
        program: GLuint,
        index: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    ) {
        if let Some((var, var_size, var_type)) =
            list.get(&program).and_then(|vars| vars.get(index as usize))
        {
            Self::write_string(var, buf_size, length, name);
            *size = *var_size;
            *type_ = *var_type;
        }
    }

    fn store_uniform(&self, location: GLint, values: Vec<GLfloat>) {
        let program = self.integer(0, c::CURRENT_PROGRAM) as GLuint;
        self.state
            .uniform_values
            .borrow_mut()
            .insert((program, location), values);
    }

    fn element_size(type_: GLenum) -> usize {
        match type_ {
            c::UNSIGNED_BYTE | c::BYTE => 1,
            c::UNSIGNED_SHORT | c::SHORT => 2,
            _ => 4,
        }
    }

    fn pixel_size(format: GLenum, type_: GLenum) -> usize {
        match (format, type_) {
            (_, c::UNSIGNED_SHORT_5_6_5)
            | (_, c::UNSIGNED_SHORT_4_4_4_4)
            | (_, c::UNSIGNED_SHORT_5_5_5_1) => 2,
            (c::RGBA, _) => 4,
            (c::RGB, _) => 3,
            (c::LUMINANCE_ALPHA, _) => 2,
            _ => 1,
        }
    }

    unsafe fn bytes<'a>(data: *const c_void, len: usize) -> &'a [u8] {
        if data.is_null() {
            &[]
        } else {
            std::slice::from_raw_parts(data as *const u8, len)
        }
    }

    unsafe fn floats<'a>(data: *const GLfloat, len: usize) -> &'a [GLfloat] {
        std::slice::from_raw_parts(data, len)
    }

    unsafe fn ints<'a>(data: *const GLint, len: usize) -> &'a [GLint] {
        std::slice::from_raw_parts(data, len)
    }
}

#[allow(non_snake_case)]
impl Gles2 for RecordingDriver {
    unsafe fn description(&self) -> String {
        "Recording mock driver".to_owned()
    }

    unsafe fn GetError(&self) -> GLenum {
        self.record("GetError()".to_owned());
        self.state
            .errors
            .borrow_mut()
            .pop_front()
            .unwrap_or(c::NO_ERROR)
    }
    unsafe fn Enable(&self, cap: GLenum) {
        self.record(format!("Enable({cap:#06x})"));
        self.state.enabled.borrow_mut().insert(cap);
    }
    unsafe fn Disable(&self, cap: GLenum) {
        self.record(format!("Disable({cap:#06x})"));
        self.state.enabled.borrow_mut().remove(&cap);
    }
    unsafe fn IsEnabled(&self, cap: GLenum) -> GLboolean {
        self.record(format!("IsEnabled({cap:#06x})"));
        self.state.enabled.borrow().contains(&cap) as GLboolean
    }
    unsafe fn GetBooleanv(&self, pname: GLenum, data: *mut GLboolean) {
        self.record(format!("GetBooleanv({pname:#06x})"));
        for (i, value) in self.integers(0, pname).into_iter().enumerate() {
            *data.add(i) = (value != 0) as GLboolean;
        }
    }
    unsafe fn GetFloatv(&self, pname: GLenum, data: *mut GLfloat) {
        self.record(format!("GetFloatv({pname:#06x})"));
        let floats = self.state.floats.borrow().get(&(0, pname)).cloned();
        let values = floats.unwrap_or_else(|| {
            self.integers(0, pname)
                .into_iter()
                .map(|v| v as GLfloat)
                .collect()
        });
        for (i, value) in values.into_iter().enumerate() {
            *data.add(i) = value;
        }
    }
    unsafe fn GetIntegerv(&self, pname: GLenum, data: *mut GLint) {
        self.record(format!("GetIntegerv({pname:#06x})"));
        for (i, value) in self.integers(0, pname).into_iter().enumerate() {
            *data.add(i) = value;
        }
    }
    unsafe fn GetString(&self, name: GLenum) -> *const GLubyte {
        self.record(format!("GetString({name:#06x})"));
        self.state
            .strings
            .borrow()
            .get(&name)
            .map_or(std::ptr::null(), |s| s.as_ptr() as *const GLubyte)
    }
    unsafe fn Hint(&self, target: GLenum, mode: GLenum) {
        self.record(format!("Hint({target:#06x}, {mode:#06x})"));
    }
    unsafe fn Finish(&self) {
        self.record("Finish()".to_owned());
    }
    unsafe fn Flush(&self) {
        self.record("Flush()".to_owned());
    }

    unsafe fn CullFace(&self, mode: GLenum) {
        self.record(format!("CullFace({mode:#06x})"));
        self.set_integer(c::CULL_FACE_MODE, &[mode as GLint]);
    }
    unsafe fn FrontFace(&self, mode: GLenum) {
        self.record(format!("FrontFace({mode:#06x})"));
        self.set_integer(c::FRONT_FACE, &[mode as GLint]);
    }
    unsafe fn LineWidth(&self, width: GLfloat) {
        self.record(format!("LineWidth({width})"));
        self.set_float(c::LINE_WIDTH, &[width]);
    }
    unsafe fn PolygonOffset(&self, factor: GLfloat, units: GLfloat) {
        self.record(format!("PolygonOffset({factor}, {units})"));
    }
    unsafe fn Viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(format!("Viewport({x}, {y}, {width}, {height})"));
        self.set_integer(c::VIEWPORT, &[x, y, width, height]);
    }
    unsafe fn DepthRangef(&self, n: GLfloat, f: GLfloat) {
        self.record(format!("DepthRangef({n}, {f})"));
        self.set_float(c::DEPTH_RANGE, &[n, f]);
    }

    unsafe fn Scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        self.record(format!("Scissor({x}, {y}, {width}, {height})"));
        self.set_integer(c::SCISSOR_BOX, &[x, y, width, height]);
    }
    unsafe fn SampleCoverage(&self, value: GLfloat, invert: GLboolean) {
        self.record(format!("SampleCoverage({value}, {invert})"));
    }
    unsafe fn StencilFunc(&self, func: GLenum, ref_: GLint, mask: GLuint) {
        self.record(format!("StencilFunc({func:#06x}, {ref_}, {mask:#x})"));
    }
    unsafe fn StencilFuncSeparate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) {
        self.record(format!(
            "StencilFuncSeparate({face:#06x}, {func:#06x}, {ref_}, {mask:#x})"
        ));
    }
    unsafe fn StencilOp(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        self.record(format!("StencilOp({fail:#06x}, {zfail:#06x}, {zpass:#06x})"));
    }
    unsafe fn StencilOpSeparate(&self, face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) {
        self.record(format!(
            "StencilOpSeparate({face:#06x}, {sfail:#06x}, {dpfail:#06x}, {dppass:#06x})"
        ));
    }
    unsafe fn DepthFunc(&self, func: GLenum) {
        self.record(format!("DepthFunc({func:#06x})"));
        self.set_integer(c::DEPTH_FUNC, &[func as GLint]);
    }
    unsafe fn BlendEquation(&self, mode: GLenum) {
        self.record(format!("BlendEquation({mode:#06x})"));
    }
    unsafe fn BlendEquationSeparate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        self.record(format!(
            "BlendEquationSeparate({mode_rgb:#06x}, {mode_alpha:#06x})"
        ));
    }
    unsafe fn BlendFunc(&self, sfactor: GLenum, dfactor: GLenum) {
        self.record(format!("BlendFunc({sfactor:#06x}, {dfactor:#06x})"));
    }
    unsafe fn BlendFuncSeparate(
        &self,
        sfactor_rgb: GLenum,
        dfactor_rgb: GLenum,
        sfactor_alpha: GLenum,
        dfactor_alpha: GLenum,
    ) {
        self.record(format!(
            "BlendFuncSeparate({sfactor_rgb:#06x}, {dfactor_rgb:#06x}, {sfactor_alpha:#06x}, {dfactor_alpha:#06x})"
        ));
    }
    unsafe fn BlendColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.record(format!("BlendColor({red}, {green}, {blue}, {alpha})"));
    }

    unsafe fn ColorMask(&self, red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) {
        self.record(format!("ColorMask({red}, {green}, {blue}, {alpha})"));
    }
    unsafe fn DepthMask(&self, flag: GLboolean) {
        self.record(format!("DepthMask({flag})"));
    }
    unsafe fn StencilMask(&self, mask: GLuint) {
        self.record(format!("StencilMask({mask:#x})"));
    }
    unsafe fn StencilMaskSeparate(&self, face: GLenum, mask: GLuint) {
        self.record(format!("StencilMaskSeparate({face:#06x}, {mask:#x})"));
    }
    unsafe fn Clear(&self, mask: GLbitfield) {
        self.record(format!("Clear({mask:#06x})"));
    }
    unsafe fn ClearColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        self.record(format!("ClearColor({red}, {green}, {blue}, {alpha})"));
    }
    unsafe fn ClearDepthf(&self, d: GLfloat) {
        self.record(format!("ClearDepthf({d})"));
    }
    unsafe fn ClearStencil(&self, s: GLint) {
        self.record(format!("ClearStencil({s})"));
    }

    unsafe fn PixelStorei(&self, pname: GLenum, param: GLint) {
        self.record(format!("PixelStorei({pname:#06x}, {param})"));
        self.set_integer(pname, &[param]);
    }
    unsafe fn ReadPixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *mut c_void,
    ) {
        self.record(format!(
            "ReadPixels({x}, {y}, {width}, {height}, {format:#06x}, {type_:#06x})"
        ));
        let len = (width.max(0) * height.max(0)) as usize * Self::pixel_size(format, type_);
        let out = std::slice::from_raw_parts_mut(pixels as *mut u8, len);
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = i as u8;
        }
    }

    unsafe fn GenBuffers(&self, n: GLsizei, buffers: *mut GLuint) {
        self.gen("GenBuffers", "buffer", n, buffers);
    }
    unsafe fn DeleteBuffers(&self, n: GLsizei, buffers: *const GLuint) {
        self.delete("DeleteBuffers", n, buffers);
    }
    unsafe fn IsBuffer(&self, buffer: GLuint) -> GLboolean {
        self.record(format!("IsBuffer({buffer})"));
        self.is_kind(buffer, "buffer")
    }
    unsafe fn BindBuffer(&self, target: GLenum, buffer: GLuint) {
        self.record(format!("BindBuffer({target:#06x}, {buffer})"));
        let binding = match target {
            c::ELEMENT_ARRAY_BUFFER => c::ELEMENT_ARRAY_BUFFER_BINDING,
            _ => c::ARRAY_BUFFER_BINDING,
        };
        self.bind(binding, buffer);
    }
    unsafe fn BufferData(&self, target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
        let bytes = Self::bytes(data, size.max(0) as usize);
        self.record(format!(
            "BufferData({target:#06x}, {size}, {bytes:?}, {usage:#06x})"
        ));
        self.set_param(target, c::BUFFER_SIZE, &[size as GLint]);
        self.set_param(target, c::BUFFER_USAGE, &[usage as GLint]);
    }
    unsafe fn BufferSubData(&self, target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) {
        let bytes = Self::bytes(data, size.max(0) as usize);
        self.record(format!(
            "BufferSubData({target:#06x}, {offset}, {size}, {bytes:?})"
        ));
    }
    unsafe fn GetBufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        self.record(format!("GetBufferParameteriv({target:#06x}, {pname:#06x})"));
        *params = self.integer(target, pname);
    }

    unsafe fn GenTextures(&self, n: GLsizei, textures: *mut GLuint) {
        self.gen("GenTextures", "texture", n, textures);
    }
    unsafe fn DeleteTextures(&self, n: GLsizei, textures: *const GLuint) {
        self.delete("DeleteTextures", n, textures);
    }
    unsafe fn IsTexture(&self, texture: GLuint) -> GLboolean {
        self.record(format!("IsTexture({texture})"));
        self.is_kind(texture, "texture")
    }
    unsafe fn BindTexture(&self, target: GLenum, texture: GLuint) {
        self.record(format!("BindTexture({target:#06x}, {texture})"));
        let binding = match target {
            c::TEXTURE_CUBE_MAP => c::TEXTURE_BINDING_CUBE_MAP,
            _ => c::TEXTURE_BINDING_2D,
        };
        self.bind(binding, texture);
    }
    unsafe fn ActiveTexture(&self, texture: GLenum) {
        self.record(format!("ActiveTexture({texture:#06x})"));
        self.set_integer(c::ACTIVE_TEXTURE, &[texture as GLint]);
    }
    unsafe fn TexImage2D(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        let len = (width.max(0) * height.max(0)) as usize * Self::pixel_size(format, type_);
        let bytes = Self::bytes(pixels, len);
        self.record(format!(
            "TexImage2D({target:#06x}, {level}, {internalformat:#06x}, {width}, {height}, {border}, {format:#06x}, {type_:#06x}, {bytes:?})"
        ));
    }
    unsafe fn TexSubImage2D(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        let len = (width.max(0) * height.max(0)) as usize * Self::pixel_size(format, type_);
        let bytes = Self::bytes(pixels, len);
        self.record(format!(
            "TexSubImage2D({target:#06x}, {level}, {xoffset}, {yoffset}, {width}, {height}, {format:#06x}, {type_:#06x}, {bytes:?})"
        ));
    }
    unsafe fn CompressedTexImage2D(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        let bytes = Self::bytes(data, image_size.max(0) as usize);
        self.record(format!(
            "CompressedTexImage2D({target:#06x}, {level}, {internalformat:#06x}, {width}, {height}, {border}, {image_size}, {bytes:?})"
        ));
    }
    unsafe fn CompressedTexSubImage2D(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        image_size: GLsizei,
        data: *const c_void,
    ) {
        let bytes = Self::bytes(data, image_size.max(0) as usize);
        self.record(format!(
            "CompressedTexSubImage2D({target:#06x}, {level}, {xoffset}, {yoffset}, {width}, {height}, {format:#06x}, {image_size}, {bytes:?})"
        ));
    }
    unsafe fn CopyTexImage2D(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        self.record(format!(
            "CopyTexImage2D({target:#06x}, {level}, {internalformat:#06x}, {x}, {y}, {width}, {height}, {border})"
        ));
    }
    unsafe fn CopyTexSubImage2D(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "CopyTexSubImage2D({target:#06x}, {level}, {xoffset}, {yoffset}, {x}, {y}, {width}, {height})"
        ));
    }
    unsafe fn GenerateMipmap(&self, target: GLenum) {
        self.record(format!("GenerateMipmap({target:#06x})"));
    }
    unsafe fn TexParameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        self.record(format!("TexParameterf({target:#06x}, {pname:#06x}, {param})"));
        self.set_param(target, pname, &[param as GLint]);
    }
    unsafe fn TexParameterfv(&self, target: GLenum, pname: GLenum, params: *const GLfloat) {
        let value = *params;
        self.record(format!("TexParameterfv({target:#06x}, {pname:#06x}, [{value}])"));
        self.set_param(target, pname, &[value as GLint]);
    }
    unsafe fn TexParameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        self.record(format!("TexParameteri({target:#06x}, {pname:#06x}, {param:#06x})"));
        self.set_param(target, pname, &[param]);
    }
    unsafe fn TexParameteriv(&self, target: GLenum, pname: GLenum, params: *const GLint) {
        let value = *params;
        self.record(format!("TexParameteriv({target:#06x}, {pname:#06x}, [{value:#06x}])"));
        self.set_param(target, pname, &[value]);
    }
    unsafe fn GetTexParameterfv(&self, target: GLenum, pname: GLenum, params: *mut GLfloat) {
        self.record(format!("GetTexParameterfv({target:#06x}, {pname:#06x})"));
        *params = self.integer(target, pname) as GLfloat;
    }
    unsafe fn GetTexParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        self.record(format!("GetTexParameteriv({target:#06x}, {pname:#06x})"));
        *params = self.integer(target, pname);
    }

    unsafe fn GenFramebuffers(&self, n: GLsizei, framebuffers: *mut GLuint) {
        self.gen("GenFramebuffers", "framebuffer", n, framebuffers);
    }
    unsafe fn DeleteFramebuffers(&self, n: GLsizei, framebuffers: *const GLuint) {
        self.delete("DeleteFramebuffers", n, framebuffers);
    }
    unsafe fn IsFramebuffer(&self, framebuffer: GLuint) -> GLboolean {
        self.record(format!("IsFramebuffer({framebuffer})"));
        self.is_kind(framebuffer, "framebuffer")
    }
    unsafe fn BindFramebuffer(&self, target: GLenum, framebuffer: GLuint) {
        self.record(format!("BindFramebuffer({target:#06x}, {framebuffer})"));
        self.bind(c::FRAMEBUFFER_BINDING, framebuffer);
    }
    unsafe fn CheckFramebufferStatus(&self, target: GLenum) -> GLenum {
        self.record(format!("CheckFramebufferStatus({target:#06x})"));
        self.state
            .framebuffer_status
            .get()
            .unwrap_or(c::FRAMEBUFFER_COMPLETE)
    }
    unsafe fn FramebufferRenderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        self.record(format!(
            "FramebufferRenderbuffer({target:#06x}, {attachment:#06x}, {renderbuffertarget:#06x}, {renderbuffer})"
        ));
        let object_type = if renderbuffer == 0 { c::NONE } else { c::RENDERBUFFER };
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE, &[object_type as GLint]);
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_NAME, &[renderbuffer as GLint]);
    }
    unsafe fn FramebufferTexture2D(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        self.record(format!(
            "FramebufferTexture2D({target:#06x}, {attachment:#06x}, {textarget:#06x}, {texture}, {level})"
        ));
        let object_type = if texture == 0 { c::NONE } else { c::TEXTURE };
        let face = if textarget == c::TEXTURE_2D { 0 } else { textarget as GLint };
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE, &[object_type as GLint]);
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_OBJECT_NAME, &[texture as GLint]);
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL, &[level]);
        self.set_param(attachment, c::FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE, &[face]);
    }
    unsafe fn GetFramebufferAttachmentParameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: *mut GLint,
    ) {
        self.record(format!(
            "GetFramebufferAttachmentParameteriv({target:#06x}, {attachment:#06x}, {pname:#06x})"
        ));
        *params = self.integer(attachment, pname);
    }

    unsafe fn GenRenderbuffers(&self, n: GLsizei, renderbuffers: *mut GLuint) {
        self.gen("GenRenderbuffers", "renderbuffer", n, renderbuffers);
    }
    unsafe fn DeleteRenderbuffers(&self, n: GLsizei, renderbuffers: *const GLuint) {
        self.delete("DeleteRenderbuffers", n, renderbuffers);
    }
    unsafe fn IsRenderbuffer(&self, renderbuffer: GLuint) -> GLboolean {
        self.record(format!("IsRenderbuffer({renderbuffer})"));
        self.is_kind(renderbuffer, "renderbuffer")
    }
    unsafe fn BindRenderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        self.record(format!("BindRenderbuffer({target:#06x}, {renderbuffer})"));
        self.bind(c::RENDERBUFFER_BINDING, renderbuffer);
    }
    unsafe fn RenderbufferStorage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        self.record(format!(
            "RenderbufferStorage({target:#06x}, {internalformat:#06x}, {width}, {height})"
        ));
        self.set_param(target, c::RENDERBUFFER_WIDTH, &[width]);
        self.set_param(target, c::RENDERBUFFER_HEIGHT, &[height]);
        self.set_param(target, c::RENDERBUFFER_INTERNAL_FORMAT, &[internalformat as GLint]);
    }
    unsafe fn GetRenderbufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        self.record(format!(
            "GetRenderbufferParameteriv({target:#06x}, {pname:#06x})"
        ));
        *params = self.integer(target, pname);
    }

    unsafe fn CreateShader(&self, type_: GLenum) -> GLuint {
        let name = self.new_name("shader");
        self.record(format!("CreateShader({type_:#06x}) -> {name}"));
        if name != 0 {
            self.set_param(name, c::SHADER_TYPE, &[type_ as GLint]);
        }
        name
    }
    unsafe fn DeleteShader(&self, shader: GLuint) {
        self.record(format!("DeleteShader({shader})"));
        self.forget(shader);
    }
    unsafe fn IsShader(&self, shader: GLuint) -> GLboolean {
        self.record(format!("IsShader({shader})"));
        self.is_kind(shader, "shader")
    }
    unsafe fn ShaderSource(
        &self,
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    ) {
        let mut source = String::new();
        for i in 0..count.max(0) as usize {
            let part = *string.add(i);
            let len = if length.is_null() { -1 } else { *length.add(i) };
            if len < 0 {
                source.push_str(&CStr::from_ptr(part).to_string_lossy());
            } else {
                let bytes = std::slice::from_raw_parts(part as *const u8, len as usize);
                source.push_str(&String::from_utf8_lossy(bytes));
            }
        }
        self.record(format!("ShaderSource({shader}, {count}, {source:?})"));
        self.set_param(shader, c::SHADER_SOURCE_LENGTH, &[source.len() as GLint + 1]);
        self.state.sources.borrow_mut().insert(shader, source);
    }
    unsafe fn CompileShader(&self, shader: GLuint) {
        self.record(format!("CompileShader({shader})"));
        let ok = !self.state.fail_compile.get();
        self.set_param(shader, c::COMPILE_STATUS, &[ok as GLint]);
        if !ok && !self.state.info_logs.borrow().contains_key(&shader) {
            self.set_info_log(shader, "0:1: syntax error");
        }
    }
    unsafe fn GetShaderiv(&self, shader: GLuint, pname: GLenum, params: *mut GLint) {
        self.record(format!("GetShaderiv({shader}, {pname:#06x})"));
        *params = match pname {
            c::INFO_LOG_LENGTH => self
                .state
                .info_logs
                .borrow()
                .get(&shader)
                .map_or(0, |log| log.len() as GLint + 1),
            _ => self.integer(shader, pname),
        };
    }
    unsafe fn GetShaderInfoLog(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        self.record(format!("GetShaderInfoLog({shader}, {buf_size})"));
        let log = self.state.info_logs.borrow().get(&shader).cloned().unwrap_or_default();
        Self::write_string(&log, buf_size, length, info_log);
    }
    unsafe fn GetShaderSource(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        source: *mut GLchar,
    ) {
        self.record(format!("GetShaderSource({shader}, {buf_size})"));
        let stored = self.state.sources.borrow().get(&shader).cloned().unwrap_or_default();
        Self::write_string(&stored, buf_size, length, source);
    }
    unsafe fn GetShaderPrecisionFormat(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
        range: *mut GLint,
        precision: *mut GLint,
    ) {
        self.record(format!(
            "GetShaderPrecisionFormat({shadertype:#06x}, {precisiontype:#06x})"
        ));
        let (low, high, bits) = match precisiontype {
            c::LOW_FLOAT | c::MEDIUM_FLOAT | c::HIGH_FLOAT => (127, 127, 23),
            _ => (31, 30, 0),
        };
        *range = low;
        *range.add(1) = high;
        *precision = bits;
    }
    unsafe fn ShaderBinary(
        &self,
        count: GLsizei,
        shaders: *const GLuint,
        binaryformat: GLenum,
        binary: *const c_void,
        length: GLsizei,
    ) {
        let shaders = std::slice::from_raw_parts(shaders, count.max(0) as usize);
        let bytes = Self::bytes(binary, length.max(0) as usize);
        self.record(format!(
            "ShaderBinary({shaders:?}, {binaryformat:#06x}, {bytes:?})"
        ));
    }
    unsafe fn ReleaseShaderCompiler(&self) {
        self.record("ReleaseShaderCompiler()".to_owned());
    }

    unsafe fn CreateProgram(&self) -> GLuint {
        let name = self.new_name("program");
        self.record(format!("CreateProgram() -> {name}"));
        name
    }
    unsafe fn DeleteProgram(&self, program: GLuint) {
        self.record(format!("DeleteProgram({program})"));
        self.forget(program);
        self.state.attached.borrow_mut().remove(&program);
    }
    unsafe fn IsProgram(&self, program: GLuint) -> GLboolean {
        self.record(format!("IsProgram({program})"));
        self.is_kind(program, "program")
    }
    unsafe fn AttachShader(&self, program: GLuint, shader: GLuint) {
        self.record(format!("AttachShader({program}, {shader})"));
        self.state
            .attached
            .borrow_mut()
            .entry(program)
            .or_default()
            .push(shader);
    }
    unsafe fn DetachShader(&self, program: GLuint, shader: GLuint) {
        self.record(format!("DetachShader({program}, {shader})"));
        if let Some(shaders) = self.state.attached.borrow_mut().get_mut(&program) {
            shaders.retain(|&s| s != shader);
        }
    }
    unsafe fn GetAttachedShaders(
        &self,
        program: GLuint,
        max_count: GLsizei,
        count: *mut GLsizei,
        shaders: *mut GLuint,
    ) {
        self.record(format!("GetAttachedShaders({program}, {max_count})"));
        let attached = self
            .state
            .attached
            .borrow()
            .get(&program)
            .cloned()
            .unwrap_or_default();
        let written = attached.len().min(max_count.max(0) as usize);
        for (i, shader) in attached.iter().take(written).enumerate() {
            *shaders.add(i) = *shader;
        }
        if !count.is_null() {
            *count = written as GLsizei;
        }
    }
    unsafe fn LinkProgram(&self, program: GLuint) {
        self.record(format!("LinkProgram({program})"));
        let ok = !self.state.fail_link.get();
        self.set_param(program, c::LINK_STATUS, &[ok as GLint]);
        if !ok && !self.state.info_logs.borrow().contains_key(&program) {
            self.set_info_log(program, "link failed");
        }
    }
    unsafe fn ValidateProgram(&self, program: GLuint) {
        self.record(format!("ValidateProgram({program})"));
        let linked = self.integer(program, c::LINK_STATUS);
        self.set_param(program, c::VALIDATE_STATUS, &[linked]);
    }
    unsafe fn UseProgram(&self, program: GLuint) {
        self.record(format!("UseProgram({program})"));
        self.bind(c::CURRENT_PROGRAM, program);
    }
    unsafe fn GetProgramiv(&self, program: GLuint, pname: GLenum, params: *mut GLint) {
        self.record(format!("GetProgramiv({program}, {pname:#06x})"));
        let max_len = |vars: Option<&Vec<(String, GLint, GLenum)>>| {
            vars.and_then(|v| v.iter().map(|(n, _, _)| n.len() as GLint + 1).max())
                .unwrap_or(0)
        };
        *params = match pname {
            c::INFO_LOG_LENGTH => self
                .state
                .info_logs
                .borrow()
                .get(&program)
                .map_or(0, |log| log.len() as GLint + 1),
            c::ATTACHED_SHADERS => self
                .state
                .attached
                .borrow()
                .get(&program)
                .map_or(0, |s| s.len() as GLint),
            c::ACTIVE_ATTRIBUTES => self
                .state
                .active_attributes
                .borrow()
                .get(&program)
                .map_or(0, |v| v.len() as GLint),
            c::ACTIVE_ATTRIBUTE_MAX_LENGTH => {
                max_len(self.state.active_attributes.borrow().get(&program))
            }
            c::ACTIVE_UNIFORMS => self
                .state
                .active_uniforms
                .borrow()
                .get(&program)
                .map_or(0, |v| v.len() as GLint),
            c::ACTIVE_UNIFORM_MAX_LENGTH => {
                max_len(self.state.active_uniforms.borrow().get(&program))
            }
            _ => self.integer(program, pname),
        };
    }
    unsafe fn GetProgramInfoLog(
        &self,
        program: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        self.record(format!("GetProgramInfoLog({program}, {buf_size})"));
        let log = self.state.info_logs.borrow().get(&program).cloned().unwrap_or_default();
        Self::write_string(&log, buf_size, length, info_log);
    }
    unsafe fn BindAttribLocation(&self, program: GLuint, index: GLuint, name: *const GLchar) {
        let name = CStr::from_ptr(name).to_string_lossy().into_owned();
        self.record(format!("BindAttribLocation({program}, {index}, {name:?})"));
        self.set_attrib_location(program, &name, index as GLint);
    }
    unsafe fn GetAttribLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        let name = CStr::from_ptr(name).to_string_lossy().into_owned();
        self.record(format!("GetAttribLocation({program}, {name:?})"));
        self.state
            .attrib_locations
            .borrow()
            .get(&(program, name))
            .copied()
            .unwrap_or(-1)
    }
    unsafe fn GetUniformLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        let name = CStr::from_ptr(name).to_string_lossy().into_owned();
        self.record(format!("GetUniformLocation({program}, {name:?})"));
        self.state
            .uniform_locations
            .borrow()
            .get(&(program, name))
            .copied()
            .unwrap_or(-1)
    }
    unsafe fn GetActiveAttrib(
        &self,
        program: GLuint,
        index: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    ) {
        self.record(format!("GetActiveAttrib({program}, {index}, {buf_size})"));
        let list = self.state.active_attributes.borrow();
        self.write_active(&list, program, index, buf_size, length, size, type_, name);
    }
    unsafe fn GetActiveUniform(
        &self,
        program: GLuint,
        index: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    ) {
        self.record(format!("GetActiveUniform({program}, {index}, {buf_size})"));
        let list = self.state.active_uniforms.borrow();
        self.write_active(&list, program, index, buf_size, length, size, type_, name);
    }
    unsafe fn GetUniformfv(&self, program: GLuint, location: GLint, params: *mut GLfloat) {
        self.record(format!("GetUniformfv({program}, {location})"));
        let values = self
            .state
            .uniform_values
            .borrow()
            .get(&(program, location))
            .cloned()
            .unwrap_or_else(|| vec![0.0]);
        for (i, value) in values.into_iter().enumerate() {
            *params.add(i) = value;
        }
    }
    unsafe fn GetUniformiv(&self, program: GLuint, location: GLint, params: *mut GLint) {
        self.record(format!("GetUniformiv({program}, {location})"));
        let values = self
            .state
            .uniform_values
            .borrow()
            .get(&(program, location))
            .cloned()
            .unwrap_or_else(|| vec![0.0]);
        for (i, value) in values.into_iter().enumerate() {
            *params.add(i) = value as GLint;
        }
    }

    unsafe fn Uniform1f(&self, location: GLint, v0: GLfloat) {
        self.record(format!("Uniform1f({location}, {v0})"));
        self.store_uniform(location, vec![v0]);
    }
    unsafe fn Uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat) {
        self.record(format!("Uniform2f({location}, {v0}, {v1})"));
        self.store_uniform(location, vec![v0, v1]);
    }
    unsafe fn Uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        self.record(format!("Uniform3f({location}, {v0}, {v1}, {v2})"));
        self.store_uniform(location, vec![v0, v1, v2]);
    }
    unsafe fn Uniform4f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) {
        self.record(format!("Uniform4f({location}, {v0}, {v1}, {v2}, {v3})"));
        self.store_uniform(location, vec![v0, v1, v2, v3]);
    }
    unsafe fn Uniform1i(&self, location: GLint, v0: GLint) {
        self.record(format!("Uniform1i({location}, {v0})"));
        self.store_uniform(location, vec![v0 as GLfloat]);
    }
    unsafe fn Uniform2i(&self, location: GLint, v0: GLint, v1: GLint) {
        self.record(format!("Uniform2i({location}, {v0}, {v1})"));
        self.store_uniform(location, vec![v0 as GLfloat, v1 as GLfloat]);
    }
    unsafe fn Uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint) {
        self.record(format!("Uniform3i({location}, {v0}, {v1}, {v2})"));
        self.store_uniform(location, vec![v0 as GLfloat, v1 as GLfloat, v2 as GLfloat]);
    }
    unsafe fn Uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
        self.record(format!("Uniform4i({location}, {v0}, {v1}, {v2}, {v3})"));
        let values = [v0, v1, v2, v3].map(|v| v as GLfloat).to_vec();
        self.store_uniform(location, values);
    }
    unsafe fn Uniform1fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        let values = Self::floats(value, count.max(0) as usize);
        self.record(format!("Uniform1fv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn Uniform2fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        let values = Self::floats(value, 2 * count.max(0) as usize);
        self.record(format!("Uniform2fv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn Uniform3fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        let values = Self::floats(value, 3 * count.max(0) as usize);
        self.record(format!("Uniform3fv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn Uniform4fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        let values = Self::floats(value, 4 * count.max(0) as usize);
        self.record(format!("Uniform4fv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn Uniform1iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        let values = Self::ints(value, count.max(0) as usize);
        self.record(format!("Uniform1iv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.iter().map(|&v| v as GLfloat).collect());
    }
    unsafe fn Uniform2iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        let values = Self::ints(value, 2 * count.max(0) as usize);
        self.record(format!("Uniform2iv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.iter().map(|&v| v as GLfloat).collect());
    }
    unsafe fn Uniform3iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        let values = Self::ints(value, 3 * count.max(0) as usize);
        self.record(format!("Uniform3iv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.iter().map(|&v| v as GLfloat).collect());
    }
    unsafe fn Uniform4iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        let values = Self::ints(value, 4 * count.max(0) as usize);
        self.record(format!("Uniform4iv({location}, {count}, {values:?})"));
        self.store_uniform(location, values.iter().map(|&v| v as GLfloat).collect());
    }
    unsafe fn UniformMatrix2fv(&self, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) {
        let values = Self::floats(value, 4 * count.max(0) as usize);
        self.record(format!(
            "UniformMatrix2fv({location}, {count}, {transpose}, {values:?})"
        ));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn UniformMatrix3fv(&self, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) {
        let values = Self::floats(value, 9 * count.max(0) as usize);
        self.record(format!(
            "UniformMatrix3fv({location}, {count}, {transpose}, {values:?})"
        ));
        self.store_uniform(location, values.to_vec());
    }
    unsafe fn UniformMatrix4fv(&self, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) {
        let values = Self::floats(value, 16 * count.max(0) as usize);
        self.record(format!(
            "UniformMatrix4fv({location}, {count}, {transpose}, {values:?})"
        ));
        self.store_uniform(location, values.to_vec());
    }

    unsafe fn EnableVertexAttribArray(&self, index: GLuint) {
        self.record(format!("EnableVertexAttribArray({index})"));
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_ENABLED, &[1]);
    }
    unsafe fn DisableVertexAttribArray(&self, index: GLuint) {
        self.record(format!("DisableVertexAttribArray({index})"));
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_ENABLED, &[0]);
    }
    unsafe fn VertexAttribPointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void,
    ) {
        let buffer = self.integer(0, c::ARRAY_BUFFER_BINDING);
        let pointer = pointer as usize;
        self.record(format!(
            "VertexAttribPointer({index}, {size}, {type_:#06x}, {normalized}, {stride}, {pointer:#x})"
        ));
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_SIZE, &[size]);
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_TYPE, &[type_ as GLint]);
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_NORMALIZED, &[normalized as GLint]);
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_STRIDE, &[stride]);
        self.set_param(index, c::VERTEX_ATTRIB_ARRAY_BUFFER_BINDING, &[buffer]);
        self.state.attrib_pointers.borrow_mut().insert(index, pointer);
    }
    unsafe fn VertexAttrib1f(&self, index: GLuint, x: GLfloat) {
        self.record(format!("VertexAttrib1f({index}, {x})"));
    }
    unsafe fn VertexAttrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        self.record(format!("VertexAttrib2f({index}, {x}, {y})"));
    }
    unsafe fn VertexAttrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        self.record(format!("VertexAttrib3f({index}, {x}, {y}, {z})"));
    }
    unsafe fn VertexAttrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.record(format!("VertexAttrib4f({index}, {x}, {y}, {z}, {w})"));
    }
    unsafe fn VertexAttrib1fv(&self, index: GLuint, v: *const GLfloat) {
        let values = Self::floats(v, 1);
        self.record(format!("VertexAttrib1fv({index}, {values:?})"));
    }
    unsafe fn VertexAttrib2fv(&self, index: GLuint, v: *const GLfloat) {
        let values = Self::floats(v, 2);
        self.record(format!("VertexAttrib2fv({index}, {values:?})"));
    }
    unsafe fn VertexAttrib3fv(&self, index: GLuint, v: *const GLfloat) {
        let values = Self::floats(v, 3);
        self.record(format!("VertexAttrib3fv({index}, {values:?})"));
    }
    unsafe fn VertexAttrib4fv(&self, index: GLuint, v: *const GLfloat) {
        let values = Self::floats(v, 4);
        self.record(format!("VertexAttrib4fv({index}, {values:?})"));
    }
    unsafe fn GetVertexAttribfv(&self, index: GLuint, pname: GLenum, params: *mut GLfloat) {
        self.record(format!("GetVertexAttribfv({index}, {pname:#06x})"));
        for (i, value) in self.integers(index, pname).into_iter().enumerate() {
            *params.add(i) = value as GLfloat;
        }
    }
    unsafe fn GetVertexAttribiv(&self, index: GLuint, pname: GLenum, params: *mut GLint) {
        self.record(format!("GetVertexAttribiv({index}, {pname:#06x})"));
        for (i, value) in self.integers(index, pname).into_iter().enumerate() {
            *params.add(i) = value;
        }
    }
    unsafe fn GetVertexAttribPointerv(&self, index: GLuint, pname: GLenum, pointer: *mut *mut c_void) {
        self.record(format!("GetVertexAttribPointerv({index}, {pname:#06x})"));
        let value = self
            .state
            .attrib_pointers
            .borrow()
            .get(&index)
            .copied()
            .unwrap_or(0);
        *pointer = value as *mut c_void;
    }

    unsafe fn DrawArrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        self.record(format!("DrawArrays({mode:#06x}, {first}, {count})"));
    }
    unsafe fn DrawElements(&self, mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void) {
        if self.integer(0, c::ELEMENT_ARRAY_BUFFER_BINDING) == 0 {
            let bytes = Self::bytes(indices, count.max(0) as usize * Self::element_size(type_));
            self.record(format!(
                "DrawElements({mode:#06x}, {count}, {type_:#06x}, {bytes:?})"
            ));
        } else {
            let offset = indices as usize;
            self.record(format!(
                "DrawElements({mode:#06x}, {count}, {type_:#06x}, {offset:#x})"
            ));
        }
    }
}
