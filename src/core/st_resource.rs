use std::{
    rc::Rc,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` lets several owners share one value of type `T` on the same
/// thread - the shape this crate uses to hand one host adapter to every
/// hologram that needs it. Cloning the handle is cheap and shares the
/// underlying value; the value itself is borrowed through short-lived
/// read/write guards.
///
/// # Type Parameters
/// - `T`: The type of the contained resource
///
/// # Examples
///
/// ## Basic Usage
/// ```
/// use voxel_plugin_util::core::StResource;
///
/// let counter = StResource::new(0);
///
/// *counter.get_mut() += 1;
///
/// assert_eq!(*counter.get(), 1);
/// ```
///
/// ## Cloning and Shared Ownership
/// ```
/// use voxel_plugin_util::core::StResource;
///
/// let resource = StResource::new(vec![1, 2, 3]);
/// let clone = resource.clone();
///
/// // Both handles see the same underlying data
/// clone.get_mut().push(4);
/// assert_eq!(resource.get().len(), 4);
/// ```
///
/// # Panics
/// - Panics if a write guard is requested while another guard from the same
///   handle is still alive on this thread
///
/// # Performance Considerations
/// - `Rc`-based, so no atomic overhead; deliberately not `Send`
/// - Keep guards short-lived: take one, do the work, drop it before taking
///   the next
pub struct StResource<T> {
    inner: Rc<RwLock<T>>,
}

impl<T> StResource<T> {
    /// Creates a new `StResource` containing the given value.
    ///
    /// # Arguments
    /// * `resource` - The value to be stored in the resource
    ///
    /// # Returns
    /// A new `StResource` containing the provided value
    pub fn new(resource: T) -> Self {
        Self {
            inner: Rc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard that allows reading the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    ///
    /// # Returns
    /// A guard that provides read access to the contained value
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap()
    }

    /// Returns a mutable guard that allows modifying the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    ///
    /// # Returns
    /// A guard that provides mutable access to the contained value
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap()
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_underlying_value() {
        let resource = StResource::new(String::from("a"));
        let clone = resource.clone();
        clone.get_mut().push('b');
        assert_eq!(*resource.get(), "ab");
    }
}
