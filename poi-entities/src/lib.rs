#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # poi-entities
//!
//! Reusable, agnostic domain entities for the POI finder.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod feature;
pub mod geo;
pub mod location;
pub mod poi;
pub mod weather;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
