//! Reference configurator
//!
//! Provides the [`ObjectAppliable`] trait for shared objects. The closure
//! sees the receiver itself, so every holder of a reference observes the
//! mutation.

/// Closure-based configuration for shared objects
///
/// Implemented for shared handles and interior-mutability cells. The
/// returned reference is the receiver, which makes calls chainable:
///
/// ```rust
/// use appliable::ObjectAppliable;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let a = Rc::new(RefCell::new(1));
/// let b = Rc::clone(&a);
///
/// a.apply(|o| *o.borrow_mut() += 1)
///     .apply(|o| *o.borrow_mut() *= 10);
///
/// assert_eq!(*b.borrow(), 20);
/// ```
pub trait ObjectAppliable {
    /// Applies configuration and returns the same reference
    #[inline]
    fn apply<F>(&self, block: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        block(self);
        self
    }

    /// Applies fallible configuration and returns the same reference
    ///
    /// There is a single underlying object, so mutations made before the
    /// closure fails are visible through every reference.
    ///
    /// # Errors
    /// Returns the closure's error unchanged.
    #[inline]
    fn try_apply<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnOnce(&Self) -> Result<(), E>,
    {
        block(self)?;
        Ok(self)
    }

    /// Applies configuration to an owned handle and hands it back
    ///
    /// Useful right after construction, where [`apply`](Self::apply) would
    /// borrow a temporary.
    #[inline]
    #[must_use]
    fn applied<F>(self, block: F) -> Self
    where
        Self: Sized,
        F: FnOnce(&Self),
    {
        block(&self);
        self
    }

    /// Fallible form of [`applied`](Self::applied)
    ///
    /// # Errors
    /// Returns the closure's error unchanged; the handle is dropped.
    #[inline]
    fn try_applied<F, E>(self, block: F) -> Result<Self, E>
    where
        Self: Sized,
        F: FnOnce(&Self) -> Result<(), E>,
    {
        block(&self)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Object {
        value: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Boom;

    fn object(value: i32) -> Rc<RefCell<Object>> {
        Rc::new(RefCell::new(Object { value }))
    }

    #[test]
    fn applied_on_construction() {
        let obj = Rc::new(RefCell::new(Object::default())).applied(|o| o.borrow_mut().value = 1);
        assert_eq!(obj.borrow().value, 1);
    }

    #[test]
    fn apply_on_either_reference_updates_both() {
        let object1 = object(1);
        let object2 = Rc::clone(&object1);

        object2.apply(|o| o.borrow_mut().value = 2);

        assert_eq!(object1.borrow().value, 2);
        assert_eq!(object2.borrow().value, 2);
    }

    #[test]
    fn chained_apply_returns_same_instance() {
        let obj = object(1);

        let result = obj
            .apply(|o| o.borrow_mut().value += 2)
            .apply(|o| o.borrow_mut().value *= 3);

        assert!(std::ptr::eq(result, &obj));
        assert_eq!(obj.borrow().value, 9);
    }

    #[test]
    fn try_apply_propagates_error() {
        let obj = object(1);

        let result = obj.try_apply(|_| Err(Boom));

        assert!(matches!(result, Err(Boom)));
        assert_eq!(obj.borrow().value, 1);
    }

    #[test]
    fn try_applied_propagates_error() {
        let result = object(1).try_applied(|o| {
            o.borrow_mut().value = 2;
            Err(Boom)
        });
        assert!(matches!(result, Err(Boom)));
    }

    #[test]
    fn no_op_apply_leaves_value_unchanged() {
        let obj = object(3);
        obj.apply(|_| {});
        assert_eq!(obj.borrow().value, 3);
    }
}
