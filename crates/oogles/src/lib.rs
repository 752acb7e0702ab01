#![allow(clippy::too_many_arguments)]

//! Object-oriented OpenGL ES 2.0.
//!
//! This crate wraps the entry points of an [`oogles_core::Gles2`] driver
//! (usually [`oogles-native`](https://docs.rs/oogles-native)) in typed,
//! reference-counted objects that delete their GL name when the last handle
//! goes away.
//!
//! # Overview
//!
//! - [`Context`] owns the driver, the per-kind object registries and the
//!   cached limits and extensions. Global state calls (blending, stencil,
//!   viewport, drawing, pixel transfer) are methods on it.
//! - [`Buffer`], [`Texture`], [`Framebuffer`], [`Renderbuffer`], [`Shader`]
//!   and [`Program`] wrap one GL object each. Clones share the object.
//! - Binding queries such as [`Context::bound_buffer`] map a native name
//!   back to the wrapper through the registries, returning `None` for names
//!   this context did not create.
//! - Every native token is exposed as a typed enum from [`oogles_core`].
//!
//! # Example
//!
//! ```no_run
//! use oogles::{BufferTarget, BufferUsage, Context, Buffer};
//!
//! # fn run(driver: impl oogles::Gles2 + 'static) -> oogles::Result<()> {
//! let ctx = unsafe { Context::new(driver) };
//! let buffer = Buffer::new(&ctx)?;
//! buffer.bind(BufferTarget::Array);
//! ctx.buffer_data(BufferTarget::Array, &[0.0f32, 1.0, 0.5], BufferUsage::StaticDraw);
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod bytes;
pub mod context;
pub mod draw;
pub mod fragment;
pub mod framebuffer;
mod object;
pub mod pixels;
pub mod program;
pub mod raster;
pub mod registry;
pub mod renderbuffer;
pub mod shader;
pub mod texture;
pub mod vertex;

pub use buffer::Buffer;
pub use bytes::Plain;
pub use context::{Context, ContextOptions, Limits, SavedState};
pub use framebuffer::{Attached, Framebuffer};
pub use program::{ActiveVariable, Program, UniformLocation};
pub use registry::Registry;
pub use renderbuffer::{Renderbuffer, RenderbufferInfo};
pub use shader::{PrecisionFormat, Shader};
pub use texture::Texture;
pub use vertex::VertexAttrib;

pub use oogles_core::enums::*;
pub use oogles_core::{consts, logging, Error, Gles2, ObjectKind, Result};
