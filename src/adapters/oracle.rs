use serde::{Deserialize, Serialize};

use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::AdapterError;
use crate::model::Employee;

/// Oracle rows arrive as XML converted to nested objects, so every scalar
/// hides one level down and the salary is a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleEntry {
    pub employee: OracleEmployee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleEmployee {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: OracleName,
    pub contact: OracleContact,
    pub job: OracleJob,
    pub compensation: OracleCompensation,
    #[serde(rename = "joinDate")]
    pub join_date: OracleJoinDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleName {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleContact {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleJob {
    pub title: String,
    pub dept: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleCompensation {
    /// Decimal amount kept as text, the way the XML export ships it.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleJoinDate {
    pub iso: String,
}

/// Adapter over the Oracle HR export. Keyed on the `@id` attribute.
#[derive(Debug, Clone, Default)]
pub struct OracleAdapter {
    entries: Vec<OracleEntry>,
}

impl OracleAdapter {
    pub fn new(entries: Vec<OracleEntry>) -> Self {
        Self { entries }
    }

    /// Adapter pre-loaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(vec![OracleEntry {
            employee: OracleEmployee {
                id: "ORC123".into(),
                name: OracleName {
                    value: "Carlos Perez".into(),
                },
                contact: OracleContact {
                    email: "carlos@oracle.com".into(),
                },
                job: OracleJob {
                    title: "Engineer".into(),
                    dept: "IT".into(),
                },
                compensation: OracleCompensation {
                    amount: "1500".into(),
                },
                join_date: OracleJoinDate {
                    iso: "2021-06-15".into(),
                },
            },
        }])
    }

    /// Direct view of the native store, for inspection in tests.
    pub fn entries(&self) -> &[OracleEntry] {
        &self.entries
    }
}

fn to_canonical(entry: &OracleEntry) -> Result<Employee, AdapterError> {
    let emp = &entry.employee;
    let salary: f64 = emp.compensation.amount.parse().map_err(|_| {
        AdapterError::MalformedRow(format!(
            "employee '{}' has non-numeric compensation amount '{}'",
            emp.id, emp.compensation.amount
        ))
    })?;
    Ok(Employee {
        id: emp.id.clone(),
        full_name: emp.name.value.clone(),
        email: emp.contact.email.clone(),
        position: emp.job.title.clone(),
        department: emp.job.dept.clone(),
        salary,
        start_date: emp.join_date.iso.clone(),
    })
}

fn to_native(employee: &Employee) -> OracleEntry {
    OracleEntry {
        employee: OracleEmployee {
            id: employee.id.clone(),
            name: OracleName {
                value: employee.full_name.clone(),
            },
            contact: OracleContact {
                email: employee.email.clone(),
            },
            job: OracleJob {
                title: employee.position.clone(),
                dept: employee.department.clone(),
            },
            compensation: OracleCompensation {
                amount: employee.salary.to_string(),
            },
            join_date: OracleJoinDate {
                iso: employee.start_date.clone(),
            },
        },
    }
}

impl SourceAdapter for OracleAdapter {
    fn source_name(&self) -> &'static str {
        "oracle"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        self.entries.iter().map(to_canonical).collect()
    }

    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError> {
        self.entries.push(to_native(employee));
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.employee.id == employee.id)
        {
            Some(entry) => {
                *entry = to_native(employee);
                Ok(UpdateOutcome::Replaced)
            }
            None => Ok(UpdateOutcome::NotPresent),
        }
    }
}
