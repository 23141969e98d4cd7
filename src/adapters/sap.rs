use serde::{Deserialize, Serialize};

use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::AdapterError;
use crate::model::Employee;

/// Flat SAP export row. Field names follow the terse uppercase convention
/// the SAP extract uses on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SapRow {
    pub code: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub area: String,
    pub sal: f64,
    pub entry: String,
}

/// Adapter over an SAP-style flat table. The canonical identifier is stored
/// verbatim in `CODE`.
#[derive(Debug, Clone, Default)]
pub struct SapAdapter {
    rows: Vec<SapRow>,
}

impl SapAdapter {
    pub fn new(rows: Vec<SapRow>) -> Self {
        Self { rows }
    }

    /// Adapter pre-loaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(vec![SapRow {
            code: "001".into(),
            name: "Ana Torres".into(),
            email: "ana@sap.com".into(),
            role: "HR Specialist".into(),
            area: "People".into(),
            sal: 1200.0,
            entry: "2022-01-10".into(),
        }])
    }

    /// Direct view of the native store, for inspection in tests.
    pub fn rows(&self) -> &[SapRow] {
        &self.rows
    }
}

fn to_canonical(row: &SapRow) -> Employee {
    Employee {
        id: row.code.clone(),
        full_name: row.name.clone(),
        email: row.email.clone(),
        position: row.role.clone(),
        department: row.area.clone(),
        salary: row.sal,
        start_date: row.entry.clone(),
    }
}

fn to_native(employee: &Employee) -> SapRow {
    SapRow {
        code: employee.id.clone(),
        name: employee.full_name.clone(),
        email: employee.email.clone(),
        role: employee.position.clone(),
        area: employee.department.clone(),
        sal: employee.salary,
        entry: employee.start_date.clone(),
    }
}

impl SourceAdapter for SapAdapter {
    fn source_name(&self) -> &'static str {
        "sap"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        Ok(self.rows.iter().map(to_canonical).collect())
    }

    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError> {
        self.rows.push(to_native(employee));
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        match self.rows.iter_mut().find(|row| row.code == employee.id) {
            Some(row) => {
                *row = to_native(employee);
                Ok(UpdateOutcome::Replaced)
            }
            None => Ok(UpdateOutcome::NotPresent),
        }
    }
}
