//! [`Gles2`] forwarded to the entry points loaded into the `gl` crate.

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;

use anyhow::Result;
use gl::types::*;
use oogles_core::consts;
use oogles_core::Gles2;

use crate::loader;

/// The system GL implementation.
///
/// GL state belongs to whichever context is current on the calling thread,
/// so the driver is neither `Send` nor `Sync`.
#[derive(Debug, Clone, Copy)]
pub struct NativeDriver {
    _not_send: PhantomData<*const ()>,
}

impl NativeDriver {
    /// Load entry points from the system GL library.
    ///
    /// A context must be current on this thread for the returned driver to
    /// be usable.
    pub fn load() -> Result<Self> {
        loader::load_system()?;
        Ok(Self::loaded())
    }

    /// Load entry points with `loader`, typically the resolver of the
    /// windowing library that created the context.
    pub fn load_with<F>(loader: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        loader::load_with(loader)?;
        Ok(Self::loaded())
    }

    // No GL calls here: loading does not require a current context.
    fn loaded() -> Self {
        tracing::debug!("native GL driver ready");
        Self {
            _not_send: PhantomData,
        }
    }

    /// # Safety
    /// A context must be current on this thread.
    unsafe fn string(name: GLenum) -> Option<String> {
        // GetString returns null or a static NUL-terminated string.
        let ptr = gl::GetString(name);
        (!ptr.is_null()).then(|| {
            CStr::from_ptr(ptr as *const _)
                .to_string_lossy()
                .into_owned()
        })
    }
}

#[allow(non_snake_case)]
impl Gles2 for NativeDriver {
    unsafe fn description(&self) -> String {
        let get = |name| unsafe { Self::string(name) }.unwrap_or_else(|| "unknown".to_owned());
        format!(
            "OpenGL {} ({}, {})",
            get(consts::VERSION),
            get(consts::VENDOR),
            get(consts::RENDERER)
        )
    }

    // Generic state
    unsafe fn GetError(&self) -> GLenum {
        gl::GetError()
    }
    unsafe fn Enable(&self, cap: GLenum) {
        gl::Enable(cap)
    }
    unsafe fn Disable(&self, cap: GLenum) {
        gl::Disable(cap)
    }
    unsafe fn IsEnabled(&self, cap: GLenum) -> GLboolean {
        gl::IsEnabled(cap)
    }
    unsafe fn GetBooleanv(&self, pname: GLenum, data: *mut GLboolean) {
        gl::GetBooleanv(pname, data as _)
    }
    unsafe fn GetFloatv(&self, pname: GLenum, data: *mut GLfloat) {
        gl::GetFloatv(pname, data as _)
    }
    unsafe fn GetIntegerv(&self, pname: GLenum, data: *mut GLint) {
        gl::GetIntegerv(pname, data as _)
    }
    unsafe fn GetString(&self, name: GLenum) -> *const GLubyte {
        gl::GetString(name)
    }
    unsafe fn Hint(&self, target: GLenum, mode: GLenum) {
        gl::Hint(target, mode)
    }
    unsafe fn Finish(&self) {
        gl::Finish()
    }
    unsafe fn Flush(&self) {
        gl::Flush()
    }

    // Rasterization
    unsafe fn CullFace(&self, mode: GLenum) {
        gl::CullFace(mode)
    }
    unsafe fn FrontFace(&self, mode: GLenum) {
        gl::FrontFace(mode)
    }
    unsafe fn LineWidth(&self, width: GLfloat) {
        gl::LineWidth(width)
    }
    unsafe fn PolygonOffset(&self, factor: GLfloat, units: GLfloat) {
        gl::PolygonOffset(factor, units)
    }
    unsafe fn Viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        gl::Viewport(x, y, width, height)
    }
    unsafe fn DepthRangef(&self, n: GLfloat, f: GLfloat) {
        gl::DepthRangef(n, f)
    }

    // Per-fragment operations
    unsafe fn Scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        gl::Scissor(x, y, width, height)
    }
    unsafe fn SampleCoverage(&self, value: GLfloat, invert: GLboolean) {
        gl::SampleCoverage(value, invert)
    }
    unsafe fn StencilFunc(&self, func: GLenum, ref_: GLint, mask: GLuint) {
        gl::StencilFunc(func, ref_, mask)
    }
    unsafe fn StencilFuncSeparate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) {
        gl::StencilFuncSeparate(face, func, ref_, mask)
    }
    unsafe fn StencilOp(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        gl::StencilOp(fail, zfail, zpass)
    }
    unsafe fn StencilOpSeparate(
        &self,
        face: GLenum,
        sfail: GLenum,
        dpfail: GLenum,
        dppass: GLenum,
    ) {
        gl::StencilOpSeparate(face, sfail, dpfail, dppass)
    }
    unsafe fn DepthFunc(&self, func: GLenum) {
        gl::DepthFunc(func)
    }
    unsafe fn BlendEquation(&self, mode: GLenum) {
        gl::BlendEquation(mode)
    }
    unsafe fn BlendEquationSeparate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        gl::BlendEquationSeparate(mode_rgb, mode_alpha)
    }
    unsafe fn BlendFunc(&self, sfactor: GLenum, dfactor: GLenum) {
        gl::BlendFunc(sfactor, dfactor)
    }
    unsafe fn BlendFuncSeparate(
        &self,
        sfactor_rgb: GLenum,
        dfactor_rgb: GLenum,
        sfactor_alpha: GLenum,
        dfactor_alpha: GLenum,
    ) {
        gl::BlendFuncSeparate(sfactor_rgb, dfactor_rgb, sfactor_alpha, dfactor_alpha)
    }
    unsafe fn BlendColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        gl::BlendColor(red, green, blue, alpha)
    }

    // Whole framebuffer operations
    unsafe fn ColorMask(
        &self,
        red: GLboolean,
        green: GLboolean,
        blue: GLboolean,
        alpha: GLboolean,
    ) {
        gl::ColorMask(red, green, blue, alpha)
    }
    unsafe fn DepthMask(&self, flag: GLboolean) {
        gl::DepthMask(flag)
    }
    unsafe fn StencilMask(&self, mask: GLuint) {
        gl::StencilMask(mask)
    }
    unsafe fn StencilMaskSeparate(&self, face: GLenum, mask: GLuint) {
        gl::StencilMaskSeparate(face, mask)
    }
    unsafe fn Clear(&self, mask: GLbitfield) {
        gl::Clear(mask)
    }
    unsafe fn ClearColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        gl::ClearColor(red, green, blue, alpha)
    }
    unsafe fn ClearDepthf(&self, d: GLfloat) {
        gl::ClearDepthf(d)
    }
    unsafe fn ClearStencil(&self, s: GLint) {
        gl::ClearStencil(s)
    }

    // Pixels
    unsafe fn PixelStorei(&self, pname: GLenum, param: GLint) {
        gl::PixelStorei(pname, param)
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
        gl::ReadPixels(x, y, width, height, format, type_, pixels as _)
    }

    // Buffers
    unsafe fn GenBuffers(&self, n: GLsizei, buffers: *mut GLuint) {
        gl::GenBuffers(n, buffers as _)
    }
    unsafe fn DeleteBuffers(&self, n: GLsizei, buffers: *const GLuint) {
        gl::DeleteBuffers(n, buffers as _)
    }
    unsafe fn IsBuffer(&self, buffer: GLuint) -> GLboolean {
        gl::IsBuffer(buffer)
    }
    unsafe fn BindBuffer(&self, target: GLenum, buffer: GLuint) {
        gl::BindBuffer(target, buffer)
    }
    unsafe fn BufferData(
        &self,
        target: GLenum,
        size: GLsizeiptr,
        data: *const c_void,
        usage: GLenum,
    ) {
        gl::BufferData(target, size, data as _, usage)
    }
    unsafe fn BufferSubData(
        &self,
        target: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *const c_void,
    ) {
        gl::BufferSubData(target, offset, size, data as _)
    }
    unsafe fn GetBufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        gl::GetBufferParameteriv(target, pname, params as _)
    }

    // Textures
    unsafe fn GenTextures(&self, n: GLsizei, textures: *mut GLuint) {
        gl::GenTextures(n, textures as _)
    }
    unsafe fn DeleteTextures(&self, n: GLsizei, textures: *const GLuint) {
        gl::DeleteTextures(n, textures as _)
    }
    unsafe fn IsTexture(&self, texture: GLuint) -> GLboolean {
        gl::IsTexture(texture)
    }
    unsafe fn BindTexture(&self, target: GLenum, texture: GLuint) {
        gl::BindTexture(target, texture)
    }
    unsafe fn ActiveTexture(&self, texture: GLenum) {
        gl::ActiveTexture(texture)
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
        gl::TexImage2D(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            format,
            type_,
            pixels as _,
        )
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
        gl::TexSubImage2D(
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            type_,
            pixels as _,
        )
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
        gl::CompressedTexImage2D(
            target,
            level,
            internalformat,
            width,
            height,
            border,
            image_size,
            data as _,
        )
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
        gl::CompressedTexSubImage2D(
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            image_size,
            data as _,
        )
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
        gl::CopyTexImage2D(target, level, internalformat, x, y, width, height, border)
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
        gl::CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height)
    }
    unsafe fn GenerateMipmap(&self, target: GLenum) {
        gl::GenerateMipmap(target)
    }
    unsafe fn TexParameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        gl::TexParameterf(target, pname, param)
    }
    unsafe fn TexParameterfv(&self, target: GLenum, pname: GLenum, params: *const GLfloat) {
        gl::TexParameterfv(target, pname, params as _)
    }
    unsafe fn TexParameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        gl::TexParameteri(target, pname, param)
    }
    unsafe fn TexParameteriv(&self, target: GLenum, pname: GLenum, params: *const GLint) {
        gl::TexParameteriv(target, pname, params as _)
    }
    unsafe fn GetTexParameterfv(&self, target: GLenum, pname: GLenum, params: *mut GLfloat) {
        gl::GetTexParameterfv(target, pname, params as _)
    }
    unsafe fn GetTexParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        gl::GetTexParameteriv(target, pname, params as _)
    }

    // Framebuffers
    unsafe fn GenFramebuffers(&self, n: GLsizei, framebuffers: *mut GLuint) {
        gl::GenFramebuffers(n, framebuffers as _)
    }
    unsafe fn DeleteFramebuffers(&self, n: GLsizei, framebuffers: *const GLuint) {
        gl::DeleteFramebuffers(n, framebuffers as _)
    }
    unsafe fn IsFramebuffer(&self, framebuffer: GLuint) -> GLboolean {
        gl::IsFramebuffer(framebuffer)
    }
    unsafe fn BindFramebuffer(&self, target: GLenum, framebuffer: GLuint) {
        gl::BindFramebuffer(target, framebuffer)
    }
    unsafe fn CheckFramebufferStatus(&self, target: GLenum) -> GLenum {
        gl::CheckFramebufferStatus(target)
    }
    unsafe fn FramebufferRenderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    ) {
        gl::FramebufferRenderbuffer(target, attachment, renderbuffertarget, renderbuffer)
    }
    unsafe fn FramebufferTexture2D(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        gl::FramebufferTexture2D(target, attachment, textarget, texture, level)
    }
    unsafe fn GetFramebufferAttachmentParameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: *mut GLint,
    ) {
        gl::GetFramebufferAttachmentParameteriv(target, attachment, pname, params as _)
    }

    // Renderbuffers
    unsafe fn GenRenderbuffers(&self, n: GLsizei, renderbuffers: *mut GLuint) {
        gl::GenRenderbuffers(n, renderbuffers as _)
    }
    unsafe fn DeleteRenderbuffers(&self, n: GLsizei, renderbuffers: *const GLuint) {
        gl::DeleteRenderbuffers(n, renderbuffers as _)
    }
    unsafe fn IsRenderbuffer(&self, renderbuffer: GLuint) -> GLboolean {
        gl::IsRenderbuffer(renderbuffer)
    }
    unsafe fn BindRenderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        gl::BindRenderbuffer(target, renderbuffer)
    }
    unsafe fn RenderbufferStorage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        gl::RenderbufferStorage(target, internalformat, width, height)
    }
    unsafe fn GetRenderbufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint) {
        gl::GetRenderbufferParameteriv(target, pname, params as _)
    }

    // Shaders
    unsafe fn CreateShader(&self, type_: GLenum) -> GLuint {
        gl::CreateShader(type_)
    }
    unsafe fn DeleteShader(&self, shader: GLuint) {
        gl::DeleteShader(shader)
    }
    unsafe fn IsShader(&self, shader: GLuint) -> GLboolean {
        gl::IsShader(shader)
    }
    unsafe fn ShaderSource(
        &self,
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    ) {
        gl::ShaderSource(shader, count, string as _, length as _)
    }
    unsafe fn CompileShader(&self, shader: GLuint) {
        gl::CompileShader(shader)
    }
    unsafe fn GetShaderiv(&self, shader: GLuint, pname: GLenum, params: *mut GLint) {
        gl::GetShaderiv(shader, pname, params as _)
    }
    unsafe fn GetShaderInfoLog(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        gl::GetShaderInfoLog(shader, buf_size, length as _, info_log as _)
    }
    unsafe fn GetShaderSource(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        source: *mut GLchar,
    ) {
        gl::GetShaderSource(shader, buf_size, length as _, source as _)
    }
    unsafe fn GetShaderPrecisionFormat(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
        range: *mut GLint,
        precision: *mut GLint,
    ) {
        gl::GetShaderPrecisionFormat(shadertype, precisiontype, range as _, precision as _)
    }
    unsafe fn ShaderBinary(
        &self,
        count: GLsizei,
        shaders: *const GLuint,
        binaryformat: GLenum,
        binary: *const c_void,
        length: GLsizei,
    ) {
        gl::ShaderBinary(count, shaders as _, binaryformat, binary as _, length)
    }
    unsafe fn ReleaseShaderCompiler(&self) {
        gl::ReleaseShaderCompiler()
    }

    // Programs
    unsafe fn CreateProgram(&self) -> GLuint {
        gl::CreateProgram()
    }
    unsafe fn DeleteProgram(&self, program: GLuint) {
        gl::DeleteProgram(program)
    }
    unsafe fn IsProgram(&self, program: GLuint) -> GLboolean {
        gl::IsProgram(program)
    }
    unsafe fn AttachShader(&self, program: GLuint, shader: GLuint) {
        gl::AttachShader(program, shader)
    }
    unsafe fn DetachShader(&self, program: GLuint, shader: GLuint) {
        gl::DetachShader(program, shader)
    }
    unsafe fn GetAttachedShaders(
        &self,
        program: GLuint,
        max_count: GLsizei,
        count: *mut GLsizei,
        shaders: *mut GLuint,
    ) {
        gl::GetAttachedShaders(program, max_count, count as _, shaders as _)
    }
    unsafe fn LinkProgram(&self, program: GLuint) {
        gl::LinkProgram(program)
    }
    unsafe fn ValidateProgram(&self, program: GLuint) {
        gl::ValidateProgram(program)
    }
    unsafe fn UseProgram(&self, program: GLuint) {
        gl::UseProgram(program)
    }
    unsafe fn GetProgramiv(&self, program: GLuint, pname: GLenum, params: *mut GLint) {
        gl::GetProgramiv(program, pname, params as _)
    }
    unsafe fn GetProgramInfoLog(
        &self,
        program: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    ) {
        gl::GetProgramInfoLog(program, buf_size, length as _, info_log as _)
    }
    unsafe fn BindAttribLocation(&self, program: GLuint, index: GLuint, name: *const GLchar) {
        gl::BindAttribLocation(program, index, name as _)
    }
    unsafe fn GetAttribLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        gl::GetAttribLocation(program, name as _)
    }
    unsafe fn GetUniformLocation(&self, program: GLuint, name: *const GLchar) -> GLint {
        gl::GetUniformLocation(program, name as _)
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
        gl::GetActiveAttrib(program, index, buf_size, length as _, size as _, type_ as _, name as _)
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
        gl::GetActiveUniform(
            program,
            index,
            buf_size,
            length as _,
            size as _,
            type_ as _,
            name as _,
        )
    }
    unsafe fn GetUniformfv(&self, program: GLuint, location: GLint, params: *mut GLfloat) {
        gl::GetUniformfv(program, location, params as _)
    }
    unsafe fn GetUniformiv(&self, program: GLuint, location: GLint, params: *mut GLint) {
        gl::GetUniformiv(program, location, params as _)
    }

    // Uniforms
    unsafe fn Uniform1f(&self, location: GLint, v0: GLfloat) {
        gl::Uniform1f(location, v0)
    }
    unsafe fn Uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat) {
        gl::Uniform2f(location, v0, v1)
    }
    unsafe fn Uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        gl::Uniform3f(location, v0, v1, v2)
    }
    unsafe fn Uniform4f(
        &self,
        location: GLint,
        v0: GLfloat,
        v1: GLfloat,
        v2: GLfloat,
        v3: GLfloat,
    ) {
        gl::Uniform4f(location, v0, v1, v2, v3)
    }
    unsafe fn Uniform1i(&self, location: GLint, v0: GLint) {
        gl::Uniform1i(location, v0)
    }
    unsafe fn Uniform2i(&self, location: GLint, v0: GLint, v1: GLint) {
        gl::Uniform2i(location, v0, v1)
    }
    unsafe fn Uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint) {
        gl::Uniform3i(location, v0, v1, v2)
    }
    unsafe fn Uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
        gl::Uniform4i(location, v0, v1, v2, v3)
    }
    unsafe fn Uniform1fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        gl::Uniform1fv(location, count, value as _)
    }
    unsafe fn Uniform2fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        gl::Uniform2fv(location, count, value as _)
    }
    unsafe fn Uniform3fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        gl::Uniform3fv(location, count, value as _)
    }
    unsafe fn Uniform4fv(&self, location: GLint, count: GLsizei, value: *const GLfloat) {
        gl::Uniform4fv(location, count, value as _)
    }
    unsafe fn Uniform1iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        gl::Uniform1iv(location, count, value as _)
    }
    unsafe fn Uniform2iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        gl::Uniform2iv(location, count, value as _)
    }
    unsafe fn Uniform3iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        gl::Uniform3iv(location, count, value as _)
    }
    unsafe fn Uniform4iv(&self, location: GLint, count: GLsizei, value: *const GLint) {
        gl::Uniform4iv(location, count, value as _)
    }
    unsafe fn UniformMatrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        gl::UniformMatrix2fv(location, count, transpose, value as _)
    }
    unsafe fn UniformMatrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        gl::UniformMatrix3fv(location, count, transpose, value as _)
    }
    unsafe fn UniformMatrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    ) {
        gl::UniformMatrix4fv(location, count, transpose, value as _)
    }

    // Vertex attributes
    unsafe fn EnableVertexAttribArray(&self, index: GLuint) {
        gl::EnableVertexAttribArray(index)
    }
    unsafe fn DisableVertexAttribArray(&self, index: GLuint) {
        gl::DisableVertexAttribArray(index)
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
        gl::VertexAttribPointer(index, size, type_, normalized, stride, pointer as _)
    }
    unsafe fn VertexAttrib1f(&self, index: GLuint, x: GLfloat) {
        gl::VertexAttrib1f(index, x)
    }
    unsafe fn VertexAttrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        gl::VertexAttrib2f(index, x, y)
    }
    unsafe fn VertexAttrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        gl::VertexAttrib3f(index, x, y, z)
    }
    unsafe fn VertexAttrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        gl::VertexAttrib4f(index, x, y, z, w)
    }
    unsafe fn VertexAttrib1fv(&self, index: GLuint, v: *const GLfloat) {
        gl::VertexAttrib1fv(index, v as _)
    }
    unsafe fn VertexAttrib2fv(&self, index: GLuint, v: *const GLfloat) {
        gl::VertexAttrib2fv(index, v as _)
    }
    unsafe fn VertexAttrib3fv(&self, index: GLuint, v: *const GLfloat) {
        gl::VertexAttrib3fv(index, v as _)
    }
    unsafe fn VertexAttrib4fv(&self, index: GLuint, v: *const GLfloat) {
        gl::VertexAttrib4fv(index, v as _)
    }
    unsafe fn GetVertexAttribfv(&self, index: GLuint, pname: GLenum, params: *mut GLfloat) {
        gl::GetVertexAttribfv(index, pname, params as _)
    }
    unsafe fn GetVertexAttribiv(&self, index: GLuint, pname: GLenum, params: *mut GLint) {
        gl::GetVertexAttribiv(index, pname, params as _)
    }
    unsafe fn GetVertexAttribPointerv(
        &self,
        index: GLuint,
        pname: GLenum,
        pointer: *mut *mut c_void,
    ) {
        gl::GetVertexAttribPointerv(index, pname, pointer as _)
    }

    // Drawing
    unsafe fn DrawArrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        gl::DrawArrays(mode, first, count)
    }
    unsafe fn DrawElements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    ) {
        gl::DrawElements(mode, count, type_, indices as _)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static GET_STRING_CALLS: AtomicUsize = AtomicUsize::new(0);

    extern "system" fn get_string(_name: GLenum) -> *const GLubyte {
        GET_STRING_CALLS.fetch_add(1, Ordering::SeqCst);
        std::ptr::null()
    }

    extern "system" fn never_called() {}

    #[test]
    fn loading_makes_no_gl_calls() {
        let driver = NativeDriver::load_with(|name| match name {
            "glGetString" => get_string as *const c_void,
            _ => never_called as *const c_void,
        });

        assert!(driver.is_ok());
        assert_eq!(GET_STRING_CALLS.load(Ordering::SeqCst), 0);
    }
}
