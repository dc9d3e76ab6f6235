use std::fmt;

use parking_lot::RwLock;

/// Independently owned piece of view state.
///
/// Guards are never returned to callers, so no lock can be held across an
/// `.await`.
pub struct StateCell<T> {
    inner: RwLock<T>,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self { inner: RwLock::new(value) }
    }

    /// Overwrite the value wholesale, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.inner.write(), value)
    }

    /// Read through a borrow without cloning.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&*self.inner.read())
    }

    /// Mutate in place under the write lock.
    pub fn update<R>(&self, write: impl FnOnce(&mut T) -> R) -> R {
        write(&mut *self.inner.write())
    }
}

impl<T: Clone> StateCell<T> {
    pub fn get(&self) -> T {
        self.inner.read().clone()
    }
}

impl<T: Default> StateCell<T> {
    /// Back to the empty default.
    pub fn reset(&self) -> T {
        self.replace(T::default())
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCell").field(&*self.inner.read()).finish()
    }
}
