//! Backend adapters. Each adapter exclusively owns an in-memory store in
//! the backend's native schema and translates bidirectionally between that
//! schema and the common [`Employee`](crate::model::Employee) model. Schema
//! differences never leak past an adapter's boundary.

pub mod bamboo;
pub mod legacy;
pub mod oracle;
pub mod sap;
pub mod workday;

pub use bamboo::BambooAdapter;
pub use legacy::LegacyAdapter;
pub use oracle::OracleAdapter;
pub use sap::SapAdapter;
pub use workday::WorkdayAdapter;

use crate::error::AdapterError;
use crate::model::Employee;

/// Result of offering an update to one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The backend held the identifier and replaced the row's fields.
    Replaced,
    /// The backend does not hold the identifier; nothing was changed. This
    /// counts as neither success nor failure at the aggregate level.
    NotPresent,
}

/// Capability set every backend implements: fetch the whole store, append
/// one record, replace one record by identifier. Each operation may fail
/// independently; side effects stay confined to the adapter's own store.
pub trait SourceAdapter {
    /// Stable identity used for provenance tagging and log context.
    fn source_name(&self) -> &'static str;

    /// Translates every native row into the common model, in store order,
    /// without mutating the store. A structurally malformed row fails the
    /// whole call; rows are never silently dropped.
    fn fetch(&self) -> Result<Vec<Employee>, AdapterError>;

    /// Translates the record into the native schema and appends it. The
    /// translation is the structural inverse of [`fetch`](Self::fetch) for
    /// every field the native schema carries.
    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError>;

    /// Replaces the native row matching the canonical identifier under this
    /// backend's key rule, or reports [`UpdateOutcome::NotPresent`].
    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError>;
}
