//! Pet boarding record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Known status values. `Boarding::status` is a free string and is not checked against these.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const CHECKED_IN: &str = "checked_in";
    pub const CHECKED_OUT: &str = "checked_out";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Boarding {
    pub id: String,
    pub pet_name: String,
    pub species: String,
    pub owner_name: String,
    pub status: String,
    pub notes: String,
}

impl Boarding {
    pub fn new(id: &str, pet_name: &str, species: &str, owner_name: &str, status: &str, notes: &str) -> Self {
        Boarding {
            id: id.to_string(),
            pet_name: pet_name.to_string(),
            species: species.to_string(),
            owner_name: owner_name.to_string(),
            status: status.to_string(),
            notes: notes.to_string(),
        }
    }

    /// The three seeded records served by the boarding endpoints.
    pub fn seed() -> Vec<Boarding> {
        vec![
            Boarding::new("B001", "Bingsu", "dog", "Sonsukku", status::CHECKED_IN, "แพ้อาหารไก่"),
            Boarding::new("B002", "Mali", "cat", "Jujihoon", status::PENDING, "ทรายแมวไม่มีกลิ่น"),
            Boarding::new("B003", "Lindy", "dog", "bogummy", status::CHECKED_OUT, "-"),
        ]
    }
}
