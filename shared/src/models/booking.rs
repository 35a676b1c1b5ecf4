//! Consultation booking and skincare routine Model
//!
//! Both are server-owned state machines; the client reads the current
//! status and issues transition requests.

use serde::{Deserialize, Serialize};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    ContactCustomer,
    AssignedExpert,
    Consulting,
    Finished,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Consultation booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOrder {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub expert_name: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Routine status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutineStatus {
    Processing,
    Done,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// One step of a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub step_number: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Skincare plan assigned after a consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub name: String,
    pub status: RoutineStatus,
    #[serde(default)]
    pub steps: Vec<RoutineStep>,
}

impl Routine {
    /// `(done, total)` step counts
    pub fn progress(&self) -> (usize, usize) {
        let done = self.steps.iter().filter(|s| s.done).count();
        (done, self.steps.len())
    }

    /// The lowest-numbered step not yet done
    pub fn next_pending_step(&self) -> Option<&RoutineStep> {
        self.steps
            .iter()
            .filter(|s| !s.done)
            .min_by_key(|s| s.step_number)
    }
}
