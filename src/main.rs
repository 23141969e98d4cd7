use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use hrbridge::adapters::{
    BambooAdapter, LegacyAdapter, OracleAdapter, SapAdapter, SourceAdapter, WorkdayAdapter,
};
use hrbridge::{Employee, HrMediator, Result, report};

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut mediator = HrMediator::new(seeded_adapters());
    match cli.command {
        Command::List { json } => list_employees(&mediator, json),
        Command::Add(args) => add_employee(&mut mediator, args),
        Command::Update(args) => update_employee(&mut mediator, args),
        Command::Find { id, json } => find_employee(&mediator, &id, json),
        Command::Report { json } => print_report(&mediator, json),
    }
}

/// The demo backend fleet. Registration order fixes provenance precedence.
fn seeded_adapters() -> Vec<Box<dyn SourceAdapter>> {
    vec![
        Box::new(SapAdapter::seeded()),
        Box::new(OracleAdapter::seeded()),
        Box::new(WorkdayAdapter::seeded()),
        Box::new(BambooAdapter::seeded()),
        Box::new(LegacyAdapter::seeded()),
    ]
}

fn list_employees(mediator: &HrMediator, json: bool) -> Result<()> {
    let records = mediator.get_all_employees();
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("no employees found");
        return Ok(());
    }
    for (index, record) in records.iter().enumerate() {
        let employee = &record.employee;
        println!(
            "{}. {} ({}) - id {} [{}]",
            index + 1,
            employee.full_name,
            employee.department,
            employee.id,
            record.source
        );
    }
    Ok(())
}

fn add_employee(mediator: &mut HrMediator, args: EmployeeArgs) -> Result<()> {
    let employee = args.into_employee();
    mediator.add_employee(&employee)?;
    println!("employee {} added", employee.id);
    Ok(())
}

fn update_employee(mediator: &mut HrMediator, args: UpdateArgs) -> Result<()> {
    let employee = args.into_employee();
    mediator.update_employee(&employee)?;
    println!("employee {} updated", employee.id);
    Ok(())
}

fn find_employee(mediator: &HrMediator, id: &str, json: bool) -> Result<()> {
    match mediator.find_employee_by_id(id) {
        Some(employee) if json => println!("{}", serde_json::to_string_pretty(&employee)?),
        Some(employee) => println!(
            "{} - {} ({}), {}, salary {:.2}, since {}",
            employee.id,
            employee.full_name,
            employee.department,
            employee.position,
            employee.salary,
            employee.start_date
        ),
        None => println!("employee {id} not found"),
    }
    Ok(())
}

fn print_report(mediator: &HrMediator, json: bool) -> Result<()> {
    let employees: Vec<Employee> = mediator
        .get_all_employees()
        .into_iter()
        .map(|record| record.employee)
        .collect();
    let summary = report::summarize(&employees);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Aggregate employee records across heterogeneous HR backends."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every employee from every reachable backend.
    List {
        /// Emit the records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add an employee to every backend that will accept it.
    Add(EmployeeArgs),
    /// Update an existing employee in every backend that holds it.
    Update(UpdateArgs),
    /// Look an employee up by identifier.
    Find {
        /// Identifier to search for.
        id: String,
        /// Emit the record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the headcount and salary report.
    Report {
        /// Emit the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct EmployeeArgs {
    /// Identifier; generated when omitted.
    #[arg(long)]
    id: Option<String>,

    /// Full display name.
    #[arg(long)]
    full_name: String,

    /// Contact email address.
    #[arg(long)]
    email: String,

    /// Position or job title.
    #[arg(long)]
    position: String,

    /// Department the employee belongs to.
    #[arg(long)]
    department: String,

    /// Salary amount.
    #[arg(long)]
    salary: f64,

    /// ISO start date, `YYYY-MM-DD`.
    #[arg(long)]
    start_date: String,
}

impl EmployeeArgs {
    fn into_employee(self) -> Employee {
        Employee {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            full_name: self.full_name,
            email: self.email,
            position: self.position,
            department: self.department,
            salary: self.salary,
            start_date: self.start_date,
        }
    }
}

#[derive(clap::Args)]
struct UpdateArgs {
    /// Identifier of the employee to update.
    #[arg(long)]
    id: String,

    /// Full display name.
    #[arg(long)]
    full_name: String,

    /// Contact email address.
    #[arg(long)]
    email: String,

    /// Position or job title.
    #[arg(long)]
    position: String,

    /// Department the employee belongs to.
    #[arg(long)]
    department: String,

    /// Salary amount.
    #[arg(long)]
    salary: f64,

    /// ISO start date, `YYYY-MM-DD`.
    #[arg(long)]
    start_date: String,
}

impl UpdateArgs {
    fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            position: self.position,
            department: self.department,
            salary: self.salary,
            start_date: self.start_date,
        }
    }
}
