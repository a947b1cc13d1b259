/*!
A Student's registration for an Event.
*/
use serde::{Deserialize, Serialize};

/**
Registration status.

`Pending` is the only state a new registration can start in, and the only
transition is `Pending` -> `Verified`.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    Pending,
    Verified,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::Verified => write!(f, "Verified"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub status: Status,
}

impl Registration {
    pub fn new(id: i64, student_id: i64, event_id: i64) -> Self {
        Self { id, student_id, event_id, status: Status::Pending }
    }

    /// Mark as verified. Verifying an already-verified registration changes
    /// nothing.
    pub fn verify(&mut self) {
        self.status = Status::Verified;
    }
}

/// Request body for creating a registration.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub student_id: i64,
    pub event_id: i64,
}
