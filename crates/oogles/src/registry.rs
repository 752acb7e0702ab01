//! Handle-to-wrapper lookup tables.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gl::types::GLuint;

/// Maps driver handles to the wrappers that own them.
///
/// Entries are weak: the registry never keeps a wrapper alive, and a wrapper
/// whose last clone dropped is never handed out again.
pub struct Registry<T> {
    entries: RefCell<HashMap<GLuint, Weak<T>>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl<T> Registry<T> {
    pub fn insert(&self, handle: GLuint, object: &Rc<T>) {
        self.entries
            .borrow_mut()
            .insert(handle, Rc::downgrade(object));
    }

    /// The live wrapper for `handle`, if any.
    pub fn get(&self, handle: GLuint) -> Option<Rc<T>> {
        if handle == 0 {
            return None;
        }
        let found = self.entries.borrow().get(&handle).map(Weak::upgrade);
        match found {
            Some(Some(object)) => Some(object),
            Some(None) => {
                self.entries.borrow_mut().remove(&handle);
                None
            }
            None => None,
        }
    }

    pub fn remove(&self, handle: GLuint) {
        self.entries.borrow_mut().remove(&handle);
    }

    /// Number of live wrappers.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_registered_instance() {
        let registry = Registry::default();
        let value = Rc::new("buffer".to_owned());
        registry.insert(7, &value);

        let found = registry.get(7).unwrap();
        assert!(Rc::ptr_eq(&found, &value));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dropped_wrappers_are_not_returned() {
        let registry = Registry::default();
        let value = Rc::new(1u32);
        registry.insert(3, &value);
        drop(value);

        assert!(registry.get(3).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn zero_and_unknown_handles_yield_nothing() {
        let registry: Registry<u32> = Registry::default();
        let value = Rc::new(5);
        registry.insert(1, &value);

        assert!(registry.get(0).is_none());
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn removed_handles_are_forgotten() {
        let registry = Registry::default();
        let value = Rc::new(5);
        registry.insert(1, &value);
        registry.remove(1);

        assert!(registry.get(1).is_none());
        assert_eq!(Rc::strong_count(&value), 1);
    }
}
