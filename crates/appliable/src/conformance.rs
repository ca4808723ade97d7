//! Conformances for standard and ecosystem types
//!
//! Value types get [`Appliable`]; shared handles and interior-mutability
//! cells get [`ObjectAppliable`]. Reference-counted handles are deliberately
//! not [`Appliable`]: cloning an `Rc` shares the object instead of copying it.
//! For the same reason a container is [`Appliable`] only when its elements
//! are.

use crate::{Appliable, ObjectAppliable};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, SystemTime};

// Value types

crate::impl_appliable!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, OsString, PathBuf, Duration, SystemTime,
);

// Containers are values only when what they hold is a value too; map keys
// cannot be mutated in place, so they only need `Clone`.
impl<T: Appliable> Appliable for Vec<T> {}
impl<T: Appliable> Appliable for VecDeque<T> {}
impl<T: Appliable> Appliable for Option<T> {}
impl<T: Appliable> Appliable for BTreeSet<T> {}
impl<T: Appliable, S: Clone> Appliable for HashSet<T, S> {}
impl<K: Clone, V: Appliable> Appliable for BTreeMap<K, V> {}
impl<K: Clone, V: Appliable, S: Clone> Appliable for HashMap<K, V, S> {}

#[cfg(feature = "chrono")]
mod chrono_types {
    use crate::Appliable;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    impl<Tz: TimeZone> Appliable for DateTime<Tz> {}

    crate::impl_appliable!(NaiveDate, NaiveTime, NaiveDateTime);
}

#[cfg(feature = "serde_json")]
mod json_types {
    use crate::Appliable;
    use serde_json::{Map, Value};

    impl Appliable for Value {}
    impl Appliable for Map<String, Value> {}
}

// Shared objects

impl<T: ?Sized> ObjectAppliable for Rc<T> {}
impl<T: ?Sized> ObjectAppliable for Arc<T> {}
impl<T: ?Sized> ObjectAppliable for RefCell<T> {}
impl<T: ?Sized> ObjectAppliable for Cell<T> {}
impl<T: ?Sized> ObjectAppliable for Mutex<T> {}
impl<T: ?Sized> ObjectAppliable for RwLock<T> {}

#[cfg(feature = "parking_lot")]
impl<T: ?Sized> ObjectAppliable for parking_lot::Mutex<T> {}
#[cfg(feature = "parking_lot")]
impl<T: ?Sized> ObjectAppliable for parking_lot::RwLock<T> {}
