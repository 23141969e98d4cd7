use tracing::{debug, info, instrument, warn};

use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::{AdapterError, HrError, Result};
use crate::model::{Employee, SourcedRecord};
use crate::validate::validate_employee;

/// One backend's fetch failure, captured during aggregation.
#[derive(Debug)]
pub struct FetchFailure {
    /// Identity of the adapter that failed.
    pub source: &'static str,
    /// The error the adapter reported.
    pub error: AdapterError,
}

/// Outcome of one read aggregation: every record the reachable backends
/// returned, plus the failures of the unreachable ones.
#[derive(Debug, Default)]
pub struct Aggregation {
    /// All records, in registration order of their source adapters and
    /// store order within each source. Cross-source duplicates are kept.
    pub records: Vec<SourcedRecord>,
    /// One entry per backend whose fetch failed.
    pub failures: Vec<FetchFailure>,
}

/// Mediator over a fixed, ordered set of backend adapters. Reads merge the
/// backends into a single provenance-tagged view while tolerating partial
/// failure; writes fan out to every backend and succeed if at least one
/// accepts them. No cross-backend atomicity: a write landing in two systems
/// and failing in three is a valid terminal state, with no rollback.
pub struct HrMediator {
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl HrMediator {
    /// Builds a mediator over the given adapters. Registration order is
    /// fixed for the mediator's lifetime and determines merge order.
    pub fn new(adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    /// Fetches from every backend, isolating per-backend failures. A single
    /// failing source never aborts the aggregate.
    #[instrument(level = "info", skip_all)]
    pub fn aggregate(&self) -> Aggregation {
        let mut aggregation = Aggregation::default();
        for adapter in &self.adapters {
            let source = adapter.source_name();
            match adapter.fetch() {
                Ok(employees) => {
                    debug!(source, count = employees.len(), "fetched records");
                    aggregation.records.extend(
                        employees
                            .into_iter()
                            .map(|employee| SourcedRecord { employee, source }),
                    );
                }
                Err(error) => {
                    warn!(source, %error, "fetch failed, continuing with remaining backends");
                    aggregation.failures.push(FetchFailure { source, error });
                }
            }
        }
        info!(
            total = aggregation.records.len(),
            failed_sources = aggregation.failures.len(),
            "aggregation complete"
        );
        aggregation
    }

    /// Returns every record from every reachable backend, tagged with its
    /// origin. Per-backend failures are logged, not surfaced.
    pub fn get_all_employees(&self) -> Vec<SourcedRecord> {
        self.aggregate().records
    }

    /// Validates the record and offers it to every backend. Succeeds if at
    /// least one backend accepts the write; fails only if all reject it.
    /// On a validation failure no backend is touched.
    #[instrument(level = "info", skip_all, fields(id = %employee.id))]
    pub fn add_employee(&mut self, employee: &Employee) -> Result<()> {
        validate_employee(employee)?;

        let mut accepted = 0usize;
        for adapter in &mut self.adapters {
            let source = adapter.source_name();
            match adapter.add(employee) {
                Ok(()) => {
                    debug!(source, "backend accepted the record");
                    accepted += 1;
                }
                Err(error) => {
                    warn!(source, %error, "backend rejected the record");
                }
            }
        }

        if accepted == 0 {
            return Err(HrError::AllWritesRejected {
                attempted: self.adapters.len(),
            });
        }
        info!(accepted, attempted = self.adapters.len(), "employee added");
        Ok(())
    }

    /// Validates the record, checks the identifier exists in at least one
    /// reachable backend, then fans the update out to every backend.
    /// Backends that do not hold the identifier no-op and count as neither
    /// success nor failure; at least one backend must actually replace its
    /// row for the aggregate to succeed.
    #[instrument(level = "info", skip_all, fields(id = %employee.id))]
    pub fn update_employee(&mut self, employee: &Employee) -> Result<()> {
        validate_employee(employee)?;

        let snapshot = self.aggregate();
        let exists = snapshot
            .records
            .iter()
            .any(|record| record.employee.id == employee.id);
        if !exists {
            return Err(HrError::NotFound(employee.id.clone()));
        }

        let mut replaced = 0usize;
        let mut absent = 0usize;
        for adapter in &mut self.adapters {
            let source = adapter.source_name();
            match adapter.update(employee) {
                Ok(UpdateOutcome::Replaced) => {
                    debug!(source, "backend replaced the record");
                    replaced += 1;
                }
                Ok(UpdateOutcome::NotPresent) => {
                    debug!(source, "identifier not held, backend skipped");
                    absent += 1;
                }
                Err(error) => {
                    warn!(source, %error, "backend rejected the update");
                }
            }
        }

        if replaced == 0 {
            // The existence check ran against a fetch-time snapshot; a row
            // can disappear between that check and the fan-out, in which
            // case every backend no-ops and the update fails here.
            warn!(absent, "no backend performed the replacement");
            return Err(HrError::AllWritesRejected {
                attempted: self.adapters.len(),
            });
        }
        info!(replaced, absent, "employee updated");
        Ok(())
    }

    /// Looks the identifier up across all backends and returns the first
    /// match in registration order, provenance stripped.
    pub fn find_employee_by_id(&self, id: &str) -> Option<Employee> {
        self.aggregate()
            .records
            .into_iter()
            .find(|record| record.employee.id == id)
            .map(|record| record.employee)
    }
}
