//! Core pieces shared by the `oogles` crates: the OpenGL ES 2.0 constant
//! table, typed enums over those constants, the [`Gles2`] driver trait and
//! the error type.
//!
//! Nothing in this crate talks to a real GL implementation. See
//! `oogles-native` for a driver backed by the system's GL, and [`mock`] for a
//! driver that records calls.

pub mod consts;
pub mod driver;
pub mod enums;
pub mod error;
pub mod logging;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use gl::types;

pub use driver::Gles2;
pub use enums::*;
pub use error::{Error, ObjectKind, Result};
