//! The OpenGL ES 2.0 entry-point set.
//!
//! Everything above this trait is typed; everything below it is the native
//! driver. Method names match the C functions without the `gl` prefix so that
//! implementations can forward mechanically.

use std::ffi::c_void;

use gl::types::*;

/// Trait representing an OpenGL ES 2.0 implementation.
///
/// # Safety
/// It is the caller's responsibility to make the GL context current on the
/// calling thread before using any of the `unsafe` methods of this trait, and
/// to pass pointers valid for the sizes the GL function reads or writes.
#[allow(non_snake_case)]
#[allow(clippy::too_many_arguments)]
pub trait Gles2 {
    /// Human-friendly description of the implementation. Native drivers
    /// query the context for it, so a context must be current.
    unsafe fn description(&self) -> String;

    // Generic state
    unsafe fn GetError(&self) -> GLenum;
    unsafe fn Enable(&self, cap: GLenum);
    unsafe fn Disable(&self, cap: GLenum);
    unsafe fn IsEnabled(&self, cap: GLenum) -> GLboolean;
    unsafe fn GetBooleanv(&self, pname: GLenum, data: *mut GLboolean);
    unsafe fn GetFloatv(&self, pname: GLenum, data: *mut GLfloat);
    unsafe fn GetIntegerv(&self, pname: GLenum, data: *mut GLint);
    unsafe fn GetString(&self, name: GLenum) -> *const GLubyte;
    unsafe fn Hint(&self, target: GLenum, mode: GLenum);
    unsafe fn Finish(&self);
    unsafe fn Flush(&self);

    // Rasterization
    unsafe fn CullFace(&self, mode: GLenum);
    unsafe fn FrontFace(&self, mode: GLenum);
    unsafe fn LineWidth(&self, width: GLfloat);
    unsafe fn PolygonOffset(&self, factor: GLfloat, units: GLfloat);
    unsafe fn Viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    unsafe fn DepthRangef(&self, n: GLfloat, f: GLfloat);

    // Per-fragment operations
    unsafe fn Scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    unsafe fn SampleCoverage(&self, value: GLfloat, invert: GLboolean);
    unsafe fn StencilFunc(&self, func: GLenum, ref_: GLint, mask: GLuint);
    unsafe fn StencilFuncSeparate(&self, face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
    unsafe fn StencilOp(&self, fail: GLenum, zfail: GLenum, zpass: GLenum);
    unsafe fn StencilOpSeparate(
        &self,
        face: GLenum,
        sfail: GLenum,
        dpfail: GLenum,
        dppass: GLenum,
    );
    unsafe fn DepthFunc(&self, func: GLenum);
    unsafe fn BlendEquation(&self, mode: GLenum);
    unsafe fn BlendEquationSeparate(&self, mode_rgb: GLenum, mode_alpha: GLenum);
    unsafe fn BlendFunc(&self, sfactor: GLenum, dfactor: GLenum);
    unsafe fn BlendFuncSeparate(
        &self,
        sfactor_rgb: GLenum,
        dfactor_rgb: GLenum,
        sfactor_alpha: GLenum,
        dfactor_alpha: GLenum,
    );
    unsafe fn BlendColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);

    // Whole framebuffer operations
    unsafe fn ColorMask(&self, red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    unsafe fn DepthMask(&self, flag: GLboolean);
    unsafe fn StencilMask(&self, mask: GLuint);
    unsafe fn StencilMaskSeparate(&self, face: GLenum, mask: GLuint);
    unsafe fn Clear(&self, mask: GLbitfield);
    unsafe fn ClearColor(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    unsafe fn ClearDepthf(&self, d: GLfloat);
    unsafe fn ClearStencil(&self, s: GLint);

    // Pixels
    unsafe fn PixelStorei(&self, pname: GLenum, param: GLint);
    unsafe fn ReadPixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: *mut c_void,
    );

    // Buffers
    unsafe fn GenBuffers(&self, n: GLsizei, buffers: *mut GLuint);
    unsafe fn DeleteBuffers(&self, n: GLsizei, buffers: *const GLuint);
    unsafe fn IsBuffer(&self, buffer: GLuint) -> GLboolean;
    unsafe fn BindBuffer(&self, target: GLenum, buffer: GLuint);
    unsafe fn BufferData(
        &self,
        target: GLenum,
        size: GLsizeiptr,
        data: *const c_void,
        usage: GLenum,
    );
    unsafe fn BufferSubData(
        &self,
        target: GLenum,
        offset: GLintptr,
        size: GLsizeiptr,
        data: *const c_void,
    );
    unsafe fn GetBufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint);

    // Textures
    unsafe fn GenTextures(&self, n: GLsizei, textures: *mut GLuint);
    unsafe fn DeleteTextures(&self, n: GLsizei, textures: *const GLuint);
    unsafe fn IsTexture(&self, texture: GLuint) -> GLboolean;
    unsafe fn BindTexture(&self, target: GLenum, texture: GLuint);
    unsafe fn ActiveTexture(&self, texture: GLenum);
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
    );
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
    );
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
    );
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
    );
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
    );
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
    );
    unsafe fn GenerateMipmap(&self, target: GLenum);
    unsafe fn TexParameterf(&self, target: GLenum, pname: GLenum, param: GLfloat);
    unsafe fn TexParameterfv(&self, target: GLenum, pname: GLenum, params: *const GLfloat);
    unsafe fn TexParameteri(&self, target: GLenum, pname: GLenum, param: GLint);
    unsafe fn TexParameteriv(&self, target: GLenum, pname: GLenum, params: *const GLint);
    unsafe fn GetTexParameterfv(&self, target: GLenum, pname: GLenum, params: *mut GLfloat);
    unsafe fn GetTexParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint);

    // Framebuffers
    unsafe fn GenFramebuffers(&self, n: GLsizei, framebuffers: *mut GLuint);
    unsafe fn DeleteFramebuffers(&self, n: GLsizei, framebuffers: *const GLuint);
    unsafe fn IsFramebuffer(&self, framebuffer: GLuint) -> GLboolean;
    unsafe fn BindFramebuffer(&self, target: GLenum, framebuffer: GLuint);
    unsafe fn CheckFramebufferStatus(&self, target: GLenum) -> GLenum;
    unsafe fn FramebufferRenderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffertarget: GLenum,
        renderbuffer: GLuint,
    );
    unsafe fn FramebufferTexture2D(
        &self,
        target: GLenum,
        attachment: GLenum,
        textarget: GLenum,
        texture: GLuint,
        level: GLint,
    );
    unsafe fn GetFramebufferAttachmentParameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: *mut GLint,
    );

    // Renderbuffers
    unsafe fn GenRenderbuffers(&self, n: GLsizei, renderbuffers: *mut GLuint);
    unsafe fn DeleteRenderbuffers(&self, n: GLsizei, renderbuffers: *const GLuint);
    unsafe fn IsRenderbuffer(&self, renderbuffer: GLuint) -> GLboolean;
    unsafe fn BindRenderbuffer(&self, target: GLenum, renderbuffer: GLuint);
    unsafe fn RenderbufferStorage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    );
    unsafe fn GetRenderbufferParameteriv(&self, target: GLenum, pname: GLenum, params: *mut GLint);

    // Shaders
    unsafe fn CreateShader(&self, type_: GLenum) -> GLuint;
    unsafe fn DeleteShader(&self, shader: GLuint);
    unsafe fn IsShader(&self, shader: GLuint) -> GLboolean;
    unsafe fn ShaderSource(
        &self,
        shader: GLuint,
        count: GLsizei,
        string: *const *const GLchar,
        length: *const GLint,
    );
    unsafe fn CompileShader(&self, shader: GLuint);
    unsafe fn GetShaderiv(&self, shader: GLuint, pname: GLenum, params: *mut GLint);
    unsafe fn GetShaderInfoLog(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    );
    unsafe fn GetShaderSource(
        &self,
        shader: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        source: *mut GLchar,
    );
    unsafe fn GetShaderPrecisionFormat(
        &self,
        shadertype: GLenum,
        precisiontype: GLenum,
        range: *mut GLint,
        precision: *mut GLint,
    );
    unsafe fn ShaderBinary(
        &self,
        count: GLsizei,
        shaders: *const GLuint,
        binaryformat: GLenum,
        binary: *const c_void,
        length: GLsizei,
    );
    unsafe fn ReleaseShaderCompiler(&self);

    // Programs
    unsafe fn CreateProgram(&self) -> GLuint;
    unsafe fn DeleteProgram(&self, program: GLuint);
    unsafe fn IsProgram(&self, program: GLuint) -> GLboolean;
    unsafe fn AttachShader(&self, program: GLuint, shader: GLuint);
    unsafe fn DetachShader(&self, program: GLuint, shader: GLuint);
    unsafe fn GetAttachedShaders(
        &self,
        program: GLuint,
        max_count: GLsizei,
        count: *mut GLsizei,
        shaders: *mut GLuint,
    );
    unsafe fn LinkProgram(&self, program: GLuint);
    unsafe fn ValidateProgram(&self, program: GLuint);
    unsafe fn UseProgram(&self, program: GLuint);
    unsafe fn GetProgramiv(&self, program: GLuint, pname: GLenum, params: *mut GLint);
    unsafe fn GetProgramInfoLog(
        &self,
        program: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        info_log: *mut GLchar,
    );
    unsafe fn BindAttribLocation(&self, program: GLuint, index: GLuint, name: *const GLchar);
    unsafe fn GetAttribLocation(&self, program: GLuint, name: *const GLchar) -> GLint;
    unsafe fn GetUniformLocation(&self, program: GLuint, name: *const GLchar) -> GLint;
    unsafe fn GetActiveAttrib(
        &self,
        program: GLuint,
        index: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    );
    unsafe fn GetActiveUniform(
        &self,
        program: GLuint,
        index: GLuint,
        buf_size: GLsizei,
        length: *mut GLsizei,
        size: *mut GLint,
        type_: *mut GLenum,
        name: *mut GLchar,
    );
    unsafe fn GetUniformfv(&self, program: GLuint, location: GLint, params: *mut GLfloat);
    unsafe fn GetUniformiv(&self, program: GLuint, location: GLint, params: *mut GLint);

    // Uniforms
    unsafe fn Uniform1f(&self, location: GLint, v0: GLfloat);
    unsafe fn Uniform2f(&self, location: GLint, v0: GLfloat, v1: GLfloat);
    unsafe fn Uniform3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat);
    unsafe fn Uniform4f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
    unsafe fn Uniform1i(&self, location: GLint, v0: GLint);
    unsafe fn Uniform2i(&self, location: GLint, v0: GLint, v1: GLint);
    unsafe fn Uniform3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint);
    unsafe fn Uniform4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint);
    unsafe fn Uniform1fv(&self, location: GLint, count: GLsizei, value: *const GLfloat);
    unsafe fn Uniform2fv(&self, location: GLint, count: GLsizei, value: *const GLfloat);
    unsafe fn Uniform3fv(&self, location: GLint, count: GLsizei, value: *const GLfloat);
    unsafe fn Uniform4fv(&self, location: GLint, count: GLsizei, value: *const GLfloat);
    unsafe fn Uniform1iv(&self, location: GLint, count: GLsizei, value: *const GLint);
    unsafe fn Uniform2iv(&self, location: GLint, count: GLsizei, value: *const GLint);
    unsafe fn Uniform3iv(&self, location: GLint, count: GLsizei, value: *const GLint);
    unsafe fn Uniform4iv(&self, location: GLint, count: GLsizei, value: *const GLint);
    unsafe fn UniformMatrix2fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    unsafe fn UniformMatrix3fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );
    unsafe fn UniformMatrix4fv(
        &self,
        location: GLint,
        count: GLsizei,
        transpose: GLboolean,
        value: *const GLfloat,
    );

    // Vertex attributes
    unsafe fn EnableVertexAttribArray(&self, index: GLuint);
    unsafe fn DisableVertexAttribArray(&self, index: GLuint);
    unsafe fn VertexAttribPointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: GLboolean,
        stride: GLsizei,
        pointer: *const c_void,
    );
    unsafe fn VertexAttrib1f(&self, index: GLuint, x: GLfloat);
    unsafe fn VertexAttrib2f(&self, index: GLuint, x: GLfloat, y: GLfloat);
    unsafe fn VertexAttrib3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat);
    unsafe fn VertexAttrib4f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    unsafe fn VertexAttrib1fv(&self, index: GLuint, v: *const GLfloat);
    unsafe fn VertexAttrib2fv(&self, index: GLuint, v: *const GLfloat);
    unsafe fn VertexAttrib3fv(&self, index: GLuint, v: *const GLfloat);
    unsafe fn VertexAttrib4fv(&self, index: GLuint, v: *const GLfloat);
    unsafe fn GetVertexAttribfv(&self, index: GLuint, pname: GLenum, params: *mut GLfloat);
    unsafe fn GetVertexAttribiv(&self, index: GLuint, pname: GLenum, params: *mut GLint);
    unsafe fn GetVertexAttribPointerv(&self, index: GLuint, pname: GLenum, pointer: *mut *mut c_void);

    // Drawing
    unsafe fn DrawArrays(&self, mode: GLenum, first: GLint, count: GLsizei);
    unsafe fn DrawElements(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        indices: *const c_void,
    );
}
