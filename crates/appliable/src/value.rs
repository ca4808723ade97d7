//! Value configurator
//!
//! Provides the [`Appliable`] trait for types with value semantics: a clone
//! is independent of its source, so configuring a copy never touches the
//! original.

/// Closure-based configuration for independently copyable values
///
/// Conformance is opt-in. Implement it with an empty impl block or through
/// [`impl_appliable!`](crate::impl_appliable):
///
/// ```rust
/// use appliable::Appliable;
///
/// #[derive(Debug, Clone, Default)]
/// struct Settings {
///     retries: u32,
/// }
///
/// impl Appliable for Settings {}
///
/// let base = Settings::default();
/// let tuned = base.applying(|s| s.retries = 3);
///
/// assert_eq!(base.retries, 0);
/// assert_eq!(tuned.retries, 3);
/// ```
///
/// Containers of shared handles are not values, since cloning them aliases
/// the objects inside:
///
/// ```compile_fail
/// use appliable::Appliable;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let shared = vec![Rc::new(RefCell::new(1))];
/// let _copy = shared.applying(|v| *v[0].borrow_mut() = 99);
/// ```
///
/// ```compile_fail
/// use appliable::Appliable;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let shared = Some(Rc::new(RefCell::new(1)));
/// let _copy = shared.applying(|o| *o.as_ref().unwrap().borrow_mut() = 7);
/// ```
///
/// # Errors
/// The `try_` variants return exactly the error produced by the closure.
pub trait Appliable: Clone {
    /// Applies configuration to a copy and returns the copy
    #[inline]
    #[must_use]
    fn applying<F>(&self, block: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut copy = self.clone();
        block(&mut copy);
        copy
    }

    /// Applies fallible configuration to a copy and returns the copy
    ///
    /// The original is only borrowed, so it is untouched whether or not the
    /// closure fails.
    ///
    /// # Errors
    /// Returns the closure's error unchanged.
    #[inline]
    fn try_applying<F, E>(&self, block: F) -> Result<Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let mut copy = self.clone();
        block(&mut copy)?;
        Ok(copy)
    }

    /// Applies configuration in place
    #[inline]
    fn apply<F>(&mut self, block: F)
    where
        F: FnOnce(&mut Self),
    {
        block(self);
    }

    /// Applies fallible configuration in place
    ///
    /// Mutations made before the closure fails are kept.
    ///
    /// # Errors
    /// Returns the closure's error unchanged.
    #[inline]
    fn try_apply<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        block(self)
    }
}

/// Declares [`Appliable`] conformance for one or more types
///
/// ```rust
/// use appliable::{impl_appliable, Appliable};
///
/// #[derive(Clone)]
/// struct Width(u32);
///
/// #[derive(Clone)]
/// struct Height(u32);
///
/// impl_appliable!(Width, Height);
///
/// let w = Width(1).applying(|w| w.0 += 1);
/// assert_eq!(w.0, 2);
/// ```
#[macro_export]
macro_rules! impl_appliable {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Appliable for $ty {})+
    };
}
