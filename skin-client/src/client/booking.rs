//! Consultation bookings and routines

use shared::models::{BookingOrder, Routine};

use crate::error::ClientResult;

use super::SkinClient;
use super::common::path_segment;

impl SkinClient {
    /// GET `/booking-orders/my-bookings`
    pub async fn my_bookings(&self) -> ClientResult<Vec<BookingOrder>> {
        self.get("/booking-orders/my-bookings").await
    }

    /// PUT `/booking-orders/:id/cancel`
    pub async fn cancel_booking(&self, booking_id: &str) -> ClientResult<BookingOrder> {
        self.put_empty(&format!("/booking-orders/{}/cancel", path_segment(booking_id)))
            .await
    }

    /// GET `/routines/my-routines`
    pub async fn my_routines(&self) -> ClientResult<Vec<Routine>> {
        self.get("/routines/my-routines").await
    }

    /// PUT `/routines/:id/steps/:stepId/done`
    pub async fn complete_routine_step(&self, routine_id: &str, step_id: &str) -> ClientResult<Routine> {
        self.put_empty(&format!(
            "/routines/{}/steps/{}/done",
            path_segment(routine_id),
            path_segment(step_id)
        ))
            .await
    }
}
