//! Loading GL entry points into the `gl` crate's function table.

use std::ffi::c_void;
use std::sync::Once;

use anyhow::{bail, Result};

static GL_INIT_ONCE: Once = Once::new();

/// Load entry points through `gl_loader`, which looks them up in the
/// system's GL library. Only the first call of either loader has an effect.
pub(crate) fn load_system() -> Result<()> {
    GL_INIT_ONCE.call_once(|| {
        gl_loader::init_gl();
        gl::load_with(|s| gl_loader::get_proc_address(s).cast());
        tracing::debug!("loaded GL entry points from the system library");
    });
    check_loaded()
}

/// Load entry points through a caller-provided resolver, such as the one a
/// windowing library exposes for its context.
pub(crate) fn load_with<F>(loader: F) -> Result<()>
where
    F: FnMut(&'static str) -> *const c_void,
{
    let mut loader = Some(loader);
    GL_INIT_ONCE.call_once(|| {
        if let Some(loader) = loader.take() {
            gl::load_with(loader);
            tracing::debug!("loaded GL entry points from the provided resolver");
        }
    });
    check_loaded()
}

fn check_loaded() -> Result<()> {
    let missing: Vec<&str> = [
        ("glGetError", gl::GetError::is_loaded()),
        ("glGetString", gl::GetString::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glGenFramebuffers", gl::GenFramebuffers::is_loaded()),
    ]
    .into_iter()
    .filter(|(_, loaded)| !loaded)
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        bail!("GL entry points could not be loaded: {}", missing.join(", "));
    }
    Ok(())
}
