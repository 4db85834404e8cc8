//! Student record with range validation and honour-roll status. In-process only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPA at or above this is on the honour roll.
pub const HONOR_GPA: f64 = 3.50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("name is required")]
    NameRequired,
    #[error("year must be between 1-4")]
    YearOutOfRange,
    #[error("gpa must be between 0-4")]
    GpaOutOfRange,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub year: i32,
    pub gpa: f64,
}

impl Student {
    pub fn new(id: &str, name: &str, email: &str, year: i32, gpa: f64) -> Self {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            year,
            gpa,
        }
    }

    pub fn is_honor(&self) -> bool {
        self.gpa >= HONOR_GPA
    }

    /// First failing rule wins: name, then year, then GPA.
    pub fn validate(&self) -> Result<(), StudentError> {
        if self.name.is_empty() {
            return Err(StudentError::NameRequired);
        }
        if !(1..=4).contains(&self.year) {
            return Err(StudentError::YearOutOfRange);
        }
        if !(0.0..=4.0).contains(&self.gpa) {
            return Err(StudentError::GpaOutOfRange);
        }
        Ok(())
    }

    /// Fixed illustrative roster.
    pub fn roster() -> Vec<Student> {
        vec![
            Student::new("1", "sopita", "sopitajengsiwong@gmail.com", 3, 3.51),
            Student::new("2", "sonsukku", "sukku_son@gmail.com", 4, 4.00),
            Student::new("3", "jujihoon", "jujihoon@gmail.com", 4, 3.99),
        ]
    }
}
