use hrbridge::report::summarize;
use hrbridge::Employee;

fn employee(department: &str, salary: f64) -> Employee {
    Employee {
        id: "E".into(),
        full_name: "Someone".into(),
        email: "someone@example.com".into(),
        position: "Staff".into(),
        department: department.into(),
        salary,
        start_date: "2020-01-01".into(),
    }
}

#[test]
fn empty_input_yields_a_zeroed_report() {
    let summary = summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.average_salary, 0.0);
    assert!(summary.by_department.is_empty());
}

#[test]
fn average_salary_is_rounded_to_two_decimals() {
    let employees = [
        employee("Ops", 10.0),
        employee("Ops", 10.1),
        employee("Ops", 10.1),
    ];
    let summary = summarize(&employees);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.average_salary, 10.07);
}

#[test]
fn departments_are_counted_in_order_of_first_appearance() {
    let employees = [
        employee("IT", 1000.0),
        employee("Finance", 1200.0),
        employee("IT", 1100.0),
        employee("People", 900.0),
    ];
    let summary = summarize(&employees);
    let breakdown: Vec<(&str, usize)> = summary
        .by_department
        .iter()
        .map(|entry| (entry.department.as_str(), entry.count))
        .collect();
    assert_eq!(breakdown, [("IT", 2), ("Finance", 1), ("People", 1)]);
}

#[test]
fn report_renders_without_data() {
    let rendered = summarize(&[]).to_string();
    assert!(rendered.contains("total employees: 0"));
    assert!(rendered.contains("(no data)"));
}
