use std::fmt;

use gl::types::GLenum;

use crate::enums::ErrorCode;

/// The kinds of GL object the wrapper manages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Buffer,
    Texture,
    Framebuffer,
    Renderbuffer,
    Shader,
    Program,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Buffer,
        ObjectKind::Texture,
        ObjectKind::Framebuffer,
        ObjectKind::Renderbuffer,
        ObjectKind::Shader,
        ObjectKind::Program,
    ];
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Buffer => "buffer",
            ObjectKind::Texture => "texture",
            ObjectKind::Framebuffer => "framebuffer",
            ObjectKind::Renderbuffer => "renderbuffer",
            ObjectKind::Shader => "shader",
            ObjectKind::Program => "program",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The driver returned the zero name from a generate/create call. This
    /// happens on resource exhaustion or after the context was lost.
    #[error("driver returned no name for new {0} object")]
    CreationFailed(ObjectKind),

    #[error("driver reported errors: {0:?}")]
    Driver(Vec<ErrorCode>),

    #[error("driver returned {value:#06x}, which is not a known {kind}")]
    UnknownConstant { kind: &'static str, value: GLenum },

    #[error("failed to compile shader: {0}")]
    Compile(String),

    #[error("failed to link program: {0}")]
    Link(String),

    /// Variable names are passed to the driver as C strings.
    #[error("name {0:?} contains a NUL byte")]
    InvalidName(String),

    #[error("pixel data holds {actual} bytes, but the image needs {needed}")]
    BufferTooSmall { needed: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
