//! Validates the illustrative student roster and reports honour status for each entry.

use bookstore_api::model::Student;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    for (i, student) in Student::roster().iter().enumerate() {
        match student.validate() {
            Ok(()) => tracing::info!(index = i, name = %student.name, honor = student.is_honor(), "valid"),
            Err(e) => tracing::warn!(index = i, name = %student.name, honor = student.is_honor(), error = %e, "invalid"),
        }
    }
}
