//! An [`oogles_core::Gles2`] driver backed by the platform's OpenGL library.
//!
//! ```no_run
//! let driver = oogles_native::NativeDriver::load()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Warning
//!
//! Loading succeeds without a current context, but every call made through
//! the driver assumes one. Calls made without a current context are
//! undefined behavior.

mod driver;
mod loader;

pub use driver::NativeDriver;
