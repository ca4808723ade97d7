//! Bulk adapters
//!
//! [`AppliableEach`] and [`ObjectAppliableEach`] apply a single closure to
//! every element of an ordered sequence, in index order. Both are fail-fast
//! with no rollback: the first error stops iteration, earlier elements keep
//! their mutations and later elements are never visited.

use crate::{Appliable, ObjectAppliable};
use std::collections::VecDeque;
use std::convert::Infallible;

/// Bulk configuration for sequences of [`Appliable`] values
///
/// ```rust
/// use appliable::AppliableEach;
///
/// let original = vec![1_u8, 2, 3];
/// let bumped = original.applying_each(|n| *n += 1);
///
/// assert_eq!(original, [1, 2, 3]);
/// assert_eq!(bumped, [2, 3, 4]);
/// ```
pub trait AppliableEach {
    /// Element type of the sequence
    type Element: Appliable;

    /// Applies fallible configuration to each element in place
    ///
    /// # Errors
    /// Returns the first error produced by the closure, unchanged.
    fn try_apply_each<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnMut(&mut Self::Element) -> Result<(), E>;

    /// Applies configuration to each element in place
    #[inline]
    fn apply_each<F>(&mut self, mut block: F)
    where
        F: FnMut(&mut Self::Element),
    {
        let outcome = self.try_apply_each(|element| {
            block(element);
            Ok::<(), Infallible>(())
        });
        match outcome {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Applies configuration to each element of a copy and returns the copy
    #[inline]
    #[must_use]
    fn applying_each<F>(&self, block: F) -> Self
    where
        Self: Clone,
        F: FnMut(&mut Self::Element),
    {
        let mut copy = self.clone();
        copy.apply_each(block);
        copy
    }

    /// Applies fallible configuration to each element of a copy
    ///
    /// The original sequence is untouched even when the closure fails.
    ///
    /// # Errors
    /// Returns the first error produced by the closure, unchanged.
    #[inline]
    fn try_applying_each<F, E>(&self, block: F) -> Result<Self, E>
    where
        Self: Clone,
        F: FnMut(&mut Self::Element) -> Result<(), E>,
    {
        let mut copy = self.clone();
        copy.try_apply_each(block)?;
        Ok(copy)
    }
}

/// Bulk configuration for sequences of [`ObjectAppliable`] objects
///
/// The sequence itself is only borrowed; its elements are mutated through
/// their shared references and the same sequence is returned.
pub trait ObjectAppliableEach {
    /// Element type of the sequence
    type Element: ObjectAppliable;

    /// Applies fallible configuration to each element
    ///
    /// # Errors
    /// Returns the first error produced by the closure, unchanged.
    fn try_apply_each<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnMut(&Self::Element) -> Result<(), E>;

    /// Applies configuration to each element
    #[inline]
    fn apply_each<F>(&self, mut block: F) -> &Self
    where
        F: FnMut(&Self::Element),
    {
        let outcome = self.try_apply_each(|element| {
            block(element);
            Ok::<(), Infallible>(())
        });
        match outcome {
            Ok(this) => this,
            Err(never) => match never {},
        }
    }
}

fn apply_values_in_order<'a, T, I, F, E>(len: usize, elements: I, mut block: F) -> Result<(), E>
where
    T: Appliable + 'a,
    I: IntoIterator<Item = &'a mut T>,
    F: FnMut(&mut T) -> Result<(), E>,
{
    tracing::trace!(len, "applying configuration to each value");
    for (index, element) in elements.into_iter().enumerate() {
        if let Err(err) = element.try_apply(&mut block) {
            tracing::debug!(index, len, "bulk apply stopped at failing element");
            return Err(err);
        }
    }
    Ok(())
}

fn apply_objects_in_order<'a, T, I, F, E>(len: usize, elements: I, mut block: F) -> Result<(), E>
where
    T: ObjectAppliable + 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> Result<(), E>,
{
    tracing::trace!(len, "applying configuration to each object");
    for (index, element) in elements.into_iter().enumerate() {
        if let Err(err) = element.try_apply(&mut block) {
            tracing::debug!(index, len, "bulk apply stopped at failing element");
            return Err(err);
        }
    }
    Ok(())
}

// Slices

impl<T: Appliable> AppliableEach for [T] {
    type Element = T;

    fn try_apply_each<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        apply_values_in_order(self.len(), self.iter_mut(), block)
    }
}

impl<T: ObjectAppliable> ObjectAppliableEach for [T] {
    type Element = T;

    fn try_apply_each<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        apply_objects_in_order(self.len(), self.iter(), block)?;
        Ok(self)
    }
}

// Arrays

impl<T: Appliable, const N: usize> AppliableEach for [T; N] {
    type Element = T;

    fn try_apply_each<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        AppliableEach::try_apply_each(self.as_mut_slice(), block)
    }
}

impl<T: ObjectAppliable, const N: usize> ObjectAppliableEach for [T; N] {
    type Element = T;

    fn try_apply_each<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        ObjectAppliableEach::try_apply_each(self.as_slice(), block)?;
        Ok(self)
    }
}

// Vec

impl<T: Appliable> AppliableEach for Vec<T> {
    type Element = T;

    fn try_apply_each<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        AppliableEach::try_apply_each(self.as_mut_slice(), block)
    }
}

impl<T: ObjectAppliable> ObjectAppliableEach for Vec<T> {
    type Element = T;

    fn try_apply_each<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        ObjectAppliableEach::try_apply_each(self.as_slice(), block)?;
        Ok(self)
    }
}

// VecDeque

impl<T: Appliable> AppliableEach for VecDeque<T> {
    type Element = T;

    fn try_apply_each<F, E>(&mut self, block: F) -> Result<(), E>
    where
        F: FnMut(&mut T) -> Result<(), E>,
    {
        apply_values_in_order(self.len(), self.iter_mut(), block)
    }
}

impl<T: ObjectAppliable> ObjectAppliableEach for VecDeque<T> {
    type Element = T;

    fn try_apply_each<F, E>(&self, block: F) -> Result<&Self, E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        apply_objects_in_order(self.len(), self.iter(), block)?;
        Ok(self)
    }
}
