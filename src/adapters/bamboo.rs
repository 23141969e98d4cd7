use serde::{Deserialize, Serialize};

use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::AdapterError;
use crate::model::Employee;

/// Minimal flat row shape used by the BambooHR export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BambooRow {
    pub emp_id: String,
    pub name: String,
    pub email_address: String,
    pub job_title: String,
    pub team: String,
    pub monthly_salary: f64,
    pub date_joined: String,
}

/// Adapter over the BambooHR export. Keyed on `emp_id`.
#[derive(Debug, Clone, Default)]
pub struct BambooAdapter {
    rows: Vec<BambooRow>,
}

impl BambooAdapter {
    pub fn new(rows: Vec<BambooRow>) -> Self {
        Self { rows }
    }

    /// Adapter pre-loaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(vec![BambooRow {
            emp_id: "BMB001".into(),
            name: "Elena Lopez".into(),
            email_address: "elena@bamboo.com".into(),
            job_title: "Accountant".into(),
            team: "Finance".into(),
            monthly_salary: 1400.0,
            date_joined: "2020-08-01".into(),
        }])
    }

    /// Direct view of the native store, for inspection in tests.
    pub fn rows(&self) -> &[BambooRow] {
        &self.rows
    }
}

fn to_canonical(row: &BambooRow) -> Employee {
    Employee {
        id: row.emp_id.clone(),
        full_name: row.name.clone(),
        email: row.email_address.clone(),
        position: row.job_title.clone(),
        department: row.team.clone(),
        salary: row.monthly_salary,
        start_date: row.date_joined.clone(),
    }
}

fn to_native(employee: &Employee) -> BambooRow {
    BambooRow {
        emp_id: employee.id.clone(),
        name: employee.full_name.clone(),
        email_address: employee.email.clone(),
        job_title: employee.position.clone(),
        team: employee.department.clone(),
        monthly_salary: employee.salary,
        date_joined: employee.start_date.clone(),
    }
}

impl SourceAdapter for BambooAdapter {
    fn source_name(&self) -> &'static str {
        "bamboo"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        Ok(self.rows.iter().map(to_canonical).collect())
    }

    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError> {
        self.rows.push(to_native(employee));
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        match self.rows.iter_mut().find(|row| row.emp_id == employee.id) {
            Some(row) => {
                *row = to_native(employee);
                Ok(UpdateOutcome::Replaced)
            }
            None => Ok(UpdateOutcome::NotPresent),
        }
    }
}
