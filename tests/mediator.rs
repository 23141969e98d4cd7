use hrbridge::adapters::{
    BambooAdapter, LegacyAdapter, OracleAdapter, SapAdapter, SourceAdapter, UpdateOutcome,
    WorkdayAdapter,
};
use hrbridge::error::AdapterError;
use hrbridge::{Employee, HrError, HrMediator};

/// Backend whose fetch always fails, as if its store were corrupted.
struct CorruptedAdapter;

impl SourceAdapter for CorruptedAdapter {
    fn source_name(&self) -> &'static str {
        "corrupted"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        Err(AdapterError::MalformedRow("store unreadable".into()))
    }

    fn add(&mut self, _employee: &Employee) -> Result<(), AdapterError> {
        Err(AdapterError::Rejected("store unreadable".into()))
    }

    fn update(&mut self, _employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        Err(AdapterError::Rejected("store unreadable".into()))
    }
}

/// Healthy reads, but every write is refused.
struct ReadOnlyAdapter;

impl SourceAdapter for ReadOnlyAdapter {
    fn source_name(&self) -> &'static str {
        "readonly"
    }

    fn fetch(&self) -> Result<Vec<Employee>, AdapterError> {
        Ok(Vec::new())
    }

    fn add(&mut self, _employee: &Employee) -> Result<(), AdapterError> {
        Err(AdapterError::Rejected("backend is read-only".into()))
    }

    fn update(&mut self, _employee: &Employee) -> Result<UpdateOutcome, AdapterError> {
        Err(AdapterError::Rejected("backend is read-only".into()))
    }
}

fn seeded_mediator() -> HrMediator {
    HrMediator::new(vec![
        Box::new(SapAdapter::seeded()),
        Box::new(OracleAdapter::seeded()),
        Box::new(WorkdayAdapter::seeded()),
        Box::new(BambooAdapter::seeded()),
        Box::new(LegacyAdapter::seeded()),
    ])
}

fn new_employee(id: &str) -> Employee {
    Employee {
        id: id.into(),
        full_name: "Nadia Farkas".into(),
        email: "nadia@example.com".into(),
        position: "Recruiter".into(),
        department: "People".into(),
        salary: 1300.0,
        start_date: "2024-06-01".into(),
    }
}

#[test]
fn healthy_aggregation_returns_every_store_in_registration_order() {
    let mediator = seeded_mediator();
    let records = mediator.get_all_employees();

    // One seeded record per backend.
    assert_eq!(records.len(), 5);
    let sources: Vec<&str> = records.iter().map(|record| record.source).collect();
    assert_eq!(sources, ["sap", "oracle", "workday", "bamboo", "legacy"]);
    assert_eq!(records[1].employee.id, "ORC123");
}

#[test]
fn one_failing_fetch_loses_no_other_records() {
    let mediator = HrMediator::new(vec![
        Box::new(SapAdapter::seeded()),
        Box::new(CorruptedAdapter),
        Box::new(BambooAdapter::seeded()),
    ]);

    let aggregation = mediator.aggregate();
    assert_eq!(aggregation.records.len(), 2);
    let sources: Vec<&str> = aggregation
        .records
        .iter()
        .map(|record| record.source)
        .collect();
    assert_eq!(sources, ["sap", "bamboo"]);
    assert_eq!(aggregation.failures.len(), 1);
    assert_eq!(aggregation.failures[0].source, "corrupted");
}

#[test]
fn duplicate_ids_across_sources_are_not_deduplicated() {
    let mut sap = SapAdapter::default();
    let mut bamboo = BambooAdapter::default();
    let shared = new_employee("DUP-1");
    sap.add(&shared).expect("sap accepts");
    bamboo.add(&shared).expect("bamboo accepts");

    let mediator = HrMediator::new(vec![Box::new(sap), Box::new(bamboo)]);
    let records = mediator.get_all_employees();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source, "sap");
    assert_eq!(records[1].source, "bamboo");
}

#[test]
fn invalid_email_fails_validation_and_touches_no_backend() {
    let mut mediator = seeded_mediator();
    let before = mediator.get_all_employees().len();

    let mut employee = new_employee("NEW-1");
    employee.email = "not-an-email".into();
    let error = mediator
        .add_employee(&employee)
        .expect_err("validation fails");
    assert!(matches!(error, HrError::Validation(_)));
    assert_eq!(mediator.get_all_employees().len(), before);
}

#[test]
fn add_lands_in_every_accepting_backend() {
    let mut mediator = seeded_mediator();
    let before = mediator.get_all_employees().len();

    mediator
        .add_employee(&new_employee("NEW-2"))
        .expect("add succeeds");
    // All five backends accept a well-formed record.
    assert_eq!(mediator.get_all_employees().len(), before + 5);
}

#[test]
fn add_succeeds_when_a_single_backend_accepts() {
    let mut mediator = HrMediator::new(vec![
        Box::new(ReadOnlyAdapter),
        Box::new(CorruptedAdapter),
        Box::new(ReadOnlyAdapter),
        Box::new(SapAdapter::default()),
    ]);

    mediator
        .add_employee(&new_employee("NEW-3"))
        .expect("one accepting backend is enough");
    let records = mediator.get_all_employees();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source, "sap");
}

#[test]
fn add_fails_only_when_every_backend_rejects() {
    let mut mediator = HrMediator::new(vec![Box::new(ReadOnlyAdapter), Box::new(CorruptedAdapter)]);

    let error = mediator
        .add_employee(&new_employee("NEW-4"))
        .expect_err("no backend accepted");
    assert!(matches!(error, HrError::AllWritesRejected { attempted: 2 }));
}

#[test]
fn update_changes_only_the_holding_backend() {
    let mut mediator = seeded_mediator();
    let untouched_before: Vec<_> = mediator
        .get_all_employees()
        .into_iter()
        .filter(|record| record.source != "workday")
        .collect();

    let mut employee = mediator
        .find_employee_by_id("WD456")
        .expect("seeded workday record exists");
    employee.salary = 1600.0;
    employee.department = "Design".into();
    mediator.update_employee(&employee).expect("update succeeds");

    let updated = mediator
        .find_employee_by_id("WD456")
        .expect("record still present");
    assert_eq!(updated.salary, 1600.0);
    assert_eq!(updated.department, "Design");

    let untouched_after: Vec<_> = mediator
        .get_all_employees()
        .into_iter()
        .filter(|record| record.source != "workday")
        .collect();
    assert_eq!(untouched_before, untouched_after);
}

#[test]
fn update_for_an_unknown_id_fails_before_any_fan_out() {
    let mut mediator = seeded_mediator();
    let before = mediator.get_all_employees();

    let error = mediator
        .update_employee(&new_employee("GHOST-1"))
        .expect_err("id exists nowhere");
    assert!(matches!(error, HrError::NotFound(ref id) if id == "GHOST-1"));
    assert_eq!(mediator.get_all_employees(), before);
}

#[test]
fn find_returns_the_first_match_in_registration_order() {
    let mut sap = SapAdapter::default();
    let mut bamboo = BambooAdapter::default();
    let mut first = new_employee("DUP-2");
    first.full_name = "First Copy".into();
    let mut second = new_employee("DUP-2");
    second.full_name = "Second Copy".into();
    sap.add(&first).expect("sap accepts");
    bamboo.add(&second).expect("bamboo accepts");

    let mediator = HrMediator::new(vec![Box::new(sap), Box::new(bamboo)]);
    let found = mediator
        .find_employee_by_id("DUP-2")
        .expect("shared id resolves");
    assert_eq!(found.full_name, "First Copy");
}

#[test]
fn find_returns_none_for_an_unknown_id() {
    let mediator = seeded_mediator();
    assert!(mediator.find_employee_by_id("GHOST-2").is_none());
}
