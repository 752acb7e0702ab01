//! Lifecycle shared by every GL object wrapper.
//!
//! An [`Object`] owns one driver name. It is registered with its context on
//! creation, unregistered on deletion, and deleted at the latest when the
//! last `Rc` to it drops.

use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

use gl::types::GLuint;
use oogles_core::{Error, Gles2, ObjectKind, Result};
use tracing::{debug, error};

use crate::context::{Context, ContextInner};
use crate::registry::Registry;

/// Per-kind hooks for [`Object`].
pub(crate) trait Kind: Sized + 'static {
    const KIND: ObjectKind;

    fn registry(inner: &ContextInner) -> &Registry<Object<Self>>;

    /// # Safety
    /// `handle` must be a live name of this kind.
    unsafe fn destroy(gl: &dyn Gles2, handle: GLuint);
}

pub(crate) struct Object<K: Kind> {
    ctx: Context,
    handle: Cell<GLuint>,
    _kind: PhantomData<K>,
}

impl<K: Kind> Object<K> {
    /// Take ownership of `handle`, freshly returned by a generate or create
    /// call. The zero name means creation failed.
    pub(crate) fn register(ctx: &Context, handle: GLuint) -> Result<Rc<Self>> {
        if handle == 0 {
            error!("driver returned no name for a new {}", K::KIND);
            return Err(Error::CreationFailed(K::KIND));
        }
        let object = Rc::new(Self {
            ctx: ctx.clone(),
            handle: Cell::new(handle),
            _kind: PhantomData,
        });
        K::registry(&ctx.inner).insert(handle, &object);
        debug!("created {} {handle}", K::KIND);
        Ok(object)
    }

    pub(crate) fn handle(&self) -> GLuint {
        self.handle.get()
    }

    pub(crate) fn is_deleted(&self) -> bool {
        self.handle.get() == 0
    }

    pub(crate) fn context(&self) -> &Context {
        &self.ctx
    }

    pub(crate) fn delete(&self) {
        let handle = self.handle.replace(0);
        if handle == 0 {
            return;
        }
        K::registry(&self.ctx.inner).remove(handle);
        // SAFETY: the handle was live until the replace above.
        self.ctx.gl(|gl| unsafe { K::destroy(gl, handle) });
        debug!("deleted {} {handle}", K::KIND);
    }
}

impl<K: Kind> Drop for Object<K> {
    fn drop(&mut self) {
        self.delete();
    }
}

/// Declares a public wrapper around `Rc<Object<Kind>>` with identity
/// equality and the lifecycle accessors.
macro_rules! object_wrapper {
    ($(#[$meta:meta])* $name:ident, $kind:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(std::rc::Rc<crate::object::Object<$kind>>);

        impl $name {
            /// The driver's name for this object, or `0` once deleted.
            pub fn handle(&self) -> gl::types::GLuint {
                self.0.handle()
            }

            pub fn is_deleted(&self) -> bool {
                self.0.is_deleted()
            }

            /// Delete the GL object now rather than when the last clone
            /// drops. Deleting twice is a no-op.
            pub fn delete(&self) {
                self.0.delete()
            }

            pub fn context(&self) -> &crate::Context {
                self.0.context()
            }

            /// The live wrapper owning `handle`, if this context created one.
            pub(crate) fn lookup(ctx: &crate::Context, handle: gl::types::GLuint) -> Option<Self> {
                <$kind as crate::object::Kind>::registry(&ctx.inner)
                    .get(handle)
                    .map($name)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::rc::Rc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::ptr::hash(std::rc::Rc::as_ptr(&self.0), state)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.handle()).finish()
            }
        }
    };
}

pub(crate) use object_wrapper;
