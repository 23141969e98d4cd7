//! Core library for the hrbridge command line application.
//!
//! The library aggregates employee records from several independently
//! formatted HR backends into one unified view and fans writes back out to
//! all of them. The modules are structured to keep responsibilities narrow
//! and composable: backend translation lives under [`adapters`], the
//! canonical data shapes inside [`model`], write-path checks in
//! [`validate`], summary computation in [`report`], and the aggregation and
//! fan-out orchestration under [`mediator`].

pub mod adapters;
pub mod error;
pub mod mediator;
pub mod model;
pub mod report;
pub mod validate;

pub use error::{AdapterError, HrError, Result, ValidationError};
pub use mediator::{Aggregation, FetchFailure, HrMediator};
pub use model::{Employee, SourcedRecord};
