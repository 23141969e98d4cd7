use std::fmt;

use serde::Serialize;

use crate::model::Employee;

/// Summary computed over a flat, provenance-stripped employee list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Total number of records across all sources.
    pub total: usize,
    /// Mean salary rounded to 2 decimals; 0.00 for an empty input.
    pub average_salary: f64,
    /// Record count per department, in order of first appearance.
    pub by_department: Vec<DepartmentCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Computes the headline figures for the report: total headcount, average
/// salary, and the per-department breakdown.
pub fn summarize(employees: &[Employee]) -> ReportSummary {
    let total = employees.len();
    let average_salary = if total == 0 {
        0.0
    } else {
        let sum: f64 = employees.iter().map(|employee| employee.salary).sum();
        (sum / total as f64 * 100.0).round() / 100.0
    };

    let mut by_department: Vec<DepartmentCount> = Vec::new();
    for employee in employees {
        match by_department
            .iter_mut()
            .find(|entry| entry.department == employee.department)
        {
            Some(entry) => entry.count += 1,
            None => by_department.push(DepartmentCount {
                department: employee.department.clone(),
                count: 1,
            }),
        }
    }

    ReportSummary {
        total,
        average_salary,
        by_department,
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee report")?;
        writeln!(f, "  total employees: {}", self.total)?;
        writeln!(f, "  average salary:  {:.2}", self.average_salary)?;
        writeln!(f, "  by department:")?;
        if self.by_department.is_empty() {
            writeln!(f, "    (no data)")?;
        }
        for entry in &self.by_department {
            writeln!(f, "    {}: {}", entry.department, entry.count)?;
        }
        Ok(())
    }
}
