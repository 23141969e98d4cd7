use serde::{Deserialize, Serialize};

/// Canonical employee record every backend schema normalises into and out
/// of. Identifiers are only unique within the backend that issued them; the
/// same logical person may carry different ids in different systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Source-scoped identifier.
    pub id: String,
    /// Full display name.
    pub full_name: String,
    /// Contact email address.
    pub email: String,
    /// Position or job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Salary amount; validated as finite and non-negative on writes.
    pub salary: f64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`) the employee joined.
    pub start_date: String,
}

/// An employee record tagged with the backend it was read from. Produced
/// only by read aggregation and never written back to any store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcedRecord {
    /// The normalised record.
    pub employee: Employee,
    /// Identity of the adapter that produced it.
    pub source: &'static str,
}
