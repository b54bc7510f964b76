use colored::Colorize;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Shared domain types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Manager,
    Developer,
    Designer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Designer => "Designer",
        };
        f.write_str(label)
    }
}

/// Everything an employee record needs at hire time. All four fields are
/// required; there is no partial construction and no mutation afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProfile {
    name: String,
    salary: u32,
    skills: String,
    experience: String,
}

impl EmployeeProfile {
    fn new(
        role: Role,
        name: &str,
        salary: u32,
        skills: &str,
        experience: &str,
    ) -> Result<Self, HiringError> {
        require_text(role, "name", name)?;
        if salary == 0 {
            return Err(HiringError::InvalidParameters {
                role,
                field: "salary",
                reason: "must be greater than zero".to_string(),
            });
        }
        require_text(role, "skills", skills)?;
        require_text(role, "experience", experience)?;

        Ok(Self {
            name: name.to_string(),
            salary,
            skills: skills.to_string(),
            experience: experience.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    pub fn skills(&self) -> &str {
        &self.skills
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }
}

fn require_text(role: Role, field: &'static str, value: &str) -> Result<(), HiringError> {
    if value.trim().is_empty() {
        return Err(HiringError::InvalidParameters {
            role,
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// Structured outcome of `Employee::work`, returned instead of printed so
/// tests can assert on it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkReport {
    pub role: Role,
    pub employee: String,
    pub activity: String,
}

impl fmt::Display for WorkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} is {}", self.role, self.employee, self.activity)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HiringError {
    #[error("cannot hire {role}: field '{field}' {reason}")]
    InvalidParameters {
        role: Role,
        field: &'static str,
        reason: String,
    },
}

// =============================================================================
// Product hierarchy: one trait, three concrete roles
// =============================================================================

pub trait Employee {
    fn role(&self) -> Role;
    fn profile(&self) -> &EmployeeProfile;
    fn work(&self) -> WorkReport;
}

pub struct Manager {
    profile: EmployeeProfile,
}

impl Employee for Manager {
    fn role(&self) -> Role {
        Role::Manager
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn work(&self) -> WorkReport {
        WorkReport {
            role: Role::Manager,
            employee: self.profile.name.clone(),
            activity: "managing people".to_string(),
        }
    }
}

pub struct Developer {
    profile: EmployeeProfile,
}

impl Employee for Developer {
    fn role(&self) -> Role {
        Role::Developer
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn work(&self) -> WorkReport {
        WorkReport {
            role: Role::Developer,
            employee: self.profile.name.clone(),
            activity: "writing code".to_string(),
        }
    }
}

pub struct Designer {
    profile: EmployeeProfile,
}

impl Employee for Designer {
    fn role(&self) -> Role {
        Role::Designer
    }

    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn work(&self) -> WorkReport {
        WorkReport {
            role: Role::Designer,
            employee: self.profile.name.clone(),
            activity: "creating the design".to_string(),
        }
    }
}

// =============================================================================
// Factory hierarchy: one trait, one stateless factory per role
// =============================================================================

/// All three roles share one constructor shape, so the factory method takes
/// an explicit typed parameter list rather than an opaque parameter bag.
/// Validation runs before any product is built; on failure no product exists.
pub trait EmployeeFactory {
    fn create_employee(
        &self,
        name: &str,
        salary: u32,
        skills: &str,
        experience: &str,
    ) -> Result<Box<dyn Employee>, HiringError>;
}

pub struct ManagerFactory;

impl EmployeeFactory for ManagerFactory {
    fn create_employee(
        &self,
        name: &str,
        salary: u32,
        skills: &str,
        experience: &str,
    ) -> Result<Box<dyn Employee>, HiringError> {
        let profile = EmployeeProfile::new(Role::Manager, name, salary, skills, experience)?;
        Ok(Box::new(Manager { profile }))
    }
}

pub struct DeveloperFactory;

impl EmployeeFactory for DeveloperFactory {
    fn create_employee(
        &self,
        name: &str,
        salary: u32,
        skills: &str,
        experience: &str,
    ) -> Result<Box<dyn Employee>, HiringError> {
        let profile = EmployeeProfile::new(Role::Developer, name, salary, skills, experience)?;
        Ok(Box::new(Developer { profile }))
    }
}

pub struct DesignerFactory;

impl EmployeeFactory for DesignerFactory {
    fn create_employee(
        &self,
        name: &str,
        salary: u32,
        skills: &str,
        experience: &str,
    ) -> Result<Box<dyn Employee>, HiringError> {
        let profile = EmployeeProfile::new(Role::Designer, name, salary, skills, experience)?;
        Ok(Box::new(Designer { profile }))
    }
}

// =============================================================================
// Demo (cargo run --bin employee_factory)
// =============================================================================

fn hire_and_report(
    factory: &dyn EmployeeFactory,
    name: &str,
    salary: u32,
    skills: &str,
    experience: &str,
) {
    match factory.create_employee(name, salary, skills, experience) {
        Ok(employee) => {
            let report = employee.work();
            println!("{} {}", "✓".green(), report);
            match serde_json::to_string(&report) {
                Ok(json) => println!("  {json}"),
                Err(err) => eprintln!("  failed to serialize report: {err}"),
            }
        }
        Err(err) => println!("{} {}", "✗".red(), err),
    }
}

fn main() {
    println!("{}", "=== ERP hiring demo ===".bold());

    let factories: Vec<(Box<dyn EmployeeFactory>, (&str, u32, &str, &str))> = vec![
        (
            Box::new(ManagerFactory),
            ("Ivan Ivanov", 50_000, "people management", "5 years"),
        ),
        (
            Box::new(DeveloperFactory),
            ("Petr Petrov", 40_000, "Rust, JavaScript", "3 years"),
        ),
        (
            Box::new(DesignerFactory),
            ("Maria Ivanova", 45_000, "Photoshop, Figma", "2 years"),
        ),
    ];

    for (factory, (name, salary, skills, experience)) in &factories {
        hire_and_report(factory.as_ref(), name, *salary, skills, experience);
    }

    println!("\n{}", "=== Failure path ===".bold());
    hire_and_report(&ManagerFactory, "", 50_000, "people management", "5 years");
}

// =============================================================================
// Tests (cargo test --bin employee_factory)
// =============================================================================
