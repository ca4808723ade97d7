//! Appliable
//!
//! Configure values and shared objects with closures.
//!
//! # Core Concepts
//!
//! - [`Appliable`]: value semantics. `applying` configures a copy and leaves
//!   the original alone, `apply` configures in place.
//! - [`ObjectAppliable`]: reference semantics. `apply` configures the shared
//!   object itself and returns the same reference for chaining.
//! - [`AppliableEach`] / [`ObjectAppliableEach`]: the same operations over
//!   every element of an ordered sequence, in index order, fail-fast.
//!
//! Every operation has a `try_` form taking a closure that returns
//! `Result<(), E>`. The error is forwarded to the caller as is; this crate
//! never produces errors of its own.
//!
//! # Example
//!
//! ```rust
//! use appliable::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Endpoint {
//!     port: u16,
//! }
//!
//! impl Appliable for Endpoint {}
//!
//! // Values: the original is untouched
//! let base = Endpoint::default();
//! let custom = base.applying(|e| e.port = 8080);
//! assert_eq!(base.port, 0);
//! assert_eq!(custom.port, 8080);
//!
//! // Objects: every handle sees the change
//! let shared = Rc::new(RefCell::new(Endpoint::default()));
//! let alias = Rc::clone(&shared);
//! shared.apply(|e| e.borrow_mut().port = 443);
//! assert_eq!(alias.borrow().port, 443);
//!
//! // Fallible closures propagate their own error
//! let rejected: Result<Endpoint, &str> = base.try_applying(|_| Err("no port"));
//! assert_eq!(rejected.unwrap_err(), "no port");
//! ```
//!
//! # Features
//!
//! - `chrono`: value conformances for chrono date and time types
//! - `parking_lot`: object conformances for parking_lot locks
//! - `serde_json`: value conformances for JSON values

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod conformance;
mod each;
mod object;
mod value;

// Re-exports
pub use each::{AppliableEach, ObjectAppliableEach};
pub use object::ObjectAppliable;
pub use value::Appliable;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for closure-based configuration
    pub use crate::{Appliable, AppliableEach, ObjectAppliable, ObjectAppliableEach};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
