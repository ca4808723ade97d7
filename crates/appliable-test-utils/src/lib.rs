//! Testing utilities for the Appliable workspace
//!
//! Shared fixtures: a value type, a shared object type, an invocation log
//! and a fixture error.

#![allow(missing_docs)]

use appliable::Appliable;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub value: i32,
}

impl Item {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Appliable for Item {}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Object {
    pub value: i32,
}

/// Shared handle to an [`Object`]; clones alias the same instance
pub type SharedObject = Rc<RefCell<Object>>;

pub fn shared_object(value: i32) -> SharedObject {
    Rc::new(RefCell::new(Object { value }))
}

pub fn items(values: &[i32]) -> Vec<Item> {
    values.iter().copied().map(Item::new).collect()
}

pub fn item_values(items: &[Item]) -> Vec<i32> {
    items.iter().map(|item| item.value).collect()
}

pub fn shared_objects(values: &[i32]) -> Vec<SharedObject> {
    values.iter().copied().map(shared_object).collect()
}

pub fn object_values(objects: &[SharedObject]) -> Vec<i32> {
    objects.iter().map(|object| object.borrow().value).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("closure failed on value {0}")]
    Boom(i32),

    #[error("closure rejected configuration: {0}")]
    Rejected(String),
}

/// Records the values a closure was invoked with, in call order
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RefCell<Vec<i32>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: i32) {
        self.calls.borrow_mut().push(value);
    }

    pub fn calls(&self) -> Vec<i32> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

/// Installs a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
