use serde::{Deserialize, Serialize};

use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::AdapterError;
use crate::model::Employee;

/// Workday REST payload: a resource id plus an `attributes` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkdayEntry {
    pub id: String,
    pub attributes: WorkdayAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkdayAttributes {
    pub full_name: String,
    pub mail: String,
    pub role: String,
    pub division: String,
    pub pay: f64,
    pub hired: String,
}

/// Adapter over the Workday REST representation. Keyed on the resource id.
#[derive(Debug, Clone, Default)]
pub struct WorkdayAdapter {
    entries: Vec<WorkdayEntry>,
}

impl WorkdayAdapter {
    pub fn new(entries: Vec<WorkdayEntry>) -> Self {
        Self { entries }
    }

    /// Adapter pre-loaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(vec![WorkdayEntry {
            id: "WD456".into(),
            attributes: WorkdayAttributes {
                full_name: "Lucia Gomez".into(),
                mail: "lucia@workday.com".into(),
                role: "Designer".into(),
                division: "Creative".into(),
                pay: 1350.0,
                hired: "2023-03-20".into(),
            },
        }])
    }

    /// Direct view of the native store, for inspection in tests.
    pub fn entries(&self) -> &[WorkdayEntry] {
        &self.entries
    }
}

fn to_canonical(entry: &WorkdayEntry) -> Employee {
    Employee {
        id: entry.id.clone(),
        full_name: entry.attributes.full_name.clone(),
        email: entry.attributes.mail.clone(),
        position: entry.attributes.role.clone(),
        department: entry.attributes.division.clone(),
        salary: entry.attributes.pay,
        start_date: entry.attributes.hired.clone(),
    }
}

fn to_native(employee: &Employee) -> WorkdayEntry {
    WorkdayEntry {
        id: employee.id.clone(),
        attributes: WorkdayAttributes {
            full_name: employee.full_name.clone(),
            mail: employee.email.clone(),
            role: employee.position.clone(),
            division: employee.department.clone(),
            pay: employee.salary,
            hired: employee.start_date.clone(),
        },
    }
}

impl SourceAdapter for WorkdayAdapter {
    fn source_name(&self) -> &'static str {
        "workday"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        Ok(self.entries.iter().map(to_canonical).collect())
    }

    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError> {
        self.entries.push(to_native(employee));
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        match self.entries.iter_mut().find(|entry| entry.id == employee.id) {
            Some(entry) => {
                *entry = to_native(employee);
                Ok(UpdateOutcome::Replaced)
            }
            None => Ok(UpdateOutcome::NotPresent),
        }
    }
}
