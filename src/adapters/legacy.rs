use crate::adapters::{SourceAdapter, UpdateOutcome};
use crate::error::AdapterError;
use crate::model::Employee;

const FIELD_COUNT: usize = 7;
const DELIMITER: char = '|';

/// Adapter over the legacy mainframe extract: one pipe-delimited line per
/// employee, `id|name|email|position|department|salary|date`. Keyed on the
/// `id|` line prefix.
#[derive(Debug, Clone, Default)]
pub struct LegacyAdapter {
    lines: Vec<String>,
}

impl LegacyAdapter {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Adapter pre-loaded with the demo dataset.
    pub fn seeded() -> Self {
        Self::new(vec![
            "LEG001|Juan Rivera|juan@legacy.com|Analyst|IT|1250|2019-05-10".to_string(),
        ])
    }

    /// Direct view of the native store, for inspection in tests.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn parse_line(line: &str) -> Result<Employee, AdapterError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(AdapterError::MalformedRow(format!(
            "expected {FIELD_COUNT} fields, found {} in '{line}'",
            fields.len()
        )));
    }
    let salary: f64 = fields[5].parse().map_err(|_| {
        AdapterError::MalformedRow(format!("non-numeric salary '{}' in '{line}'", fields[5]))
    })?;
    Ok(Employee {
        id: fields[0].to_string(),
        full_name: fields[1].to_string(),
        email: fields[2].to_string(),
        position: fields[3].to_string(),
        department: fields[4].to_string(),
        salary,
        start_date: fields[6].to_string(),
    })
}

fn encode_line(employee: &Employee) -> Result<String, AdapterError> {
    let salary = employee.salary.to_string();
    let fields = [
        employee.id.as_str(),
        employee.full_name.as_str(),
        employee.email.as_str(),
        employee.position.as_str(),
        employee.department.as_str(),
        salary.as_str(),
        employee.start_date.as_str(),
    ];
    // A literal delimiter inside a field cannot round-trip through the
    // line format, so the backend refuses the record.
    if fields.iter().any(|field| field.contains(DELIMITER)) {
        return Err(AdapterError::Rejected(format!(
            "record '{}' contains the reserved '{DELIMITER}' delimiter",
            employee.id
        )));
    }
    Ok(fields.join(&DELIMITER.to_string()))
}

impl SourceAdapter for LegacyAdapter {
    fn source_name(&self) -> &'static str {
        "legacy"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        self.lines.iter().map(|line| parse_line(line)).collect()
    }

    fn add(&mut self, employee: &Employee) -> Result<(), AdapterError> {
        let line = encode_line(employee)?;
        self.lines.push(line);
        Ok(())
    }

    fn update(&mut self, employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        let prefix = format!("{}{DELIMITER}", employee.id);
        match self.lines.iter_mut().find(|line| line.starts_with(&prefix)) {
            Some(line) => {
                *line = encode_line(employee)?;
                Ok(UpdateOutcome::Replaced)
            }
            None => Ok(UpdateOutcome::NotPresent),
        }
    }
}
