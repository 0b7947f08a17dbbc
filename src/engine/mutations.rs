use tracing::debug;
use ulid::Ulid;

use crate::model::{Booking, BookingStatus, Ms, Span};
use crate::observability;

use super::{Engine, EngineError};

impl Engine {
    /// Place a booking on an item. Persists with status `Waiting`.
    ///
    /// Preconditions run in a fixed order; the first failure is reported and
    /// nothing is written. Overlap against other bookings of the same item
    /// is deliberately not checked.
    pub async fn create_booking(
        &self,
        booker_id: Ulid,
        item_id: Ulid,
        start: Ms,
        end: Ms,
    ) -> Result<Booking, EngineError> {
        debug!(%booker_id, %item_id, start, end, "create booking request");

        self.require_valid_range(start, end)?;
        self.require_item_exists(item_id).await?;
        self.require_item_available(item_id).await?;

        let owner_id = self
            .items
            .owner_of(item_id)
            .await
            .ok_or(EngineError::ItemNotFound(item_id))?;
        if owner_id == booker_id {
            return Err(EngineError::OwnItemBooking(booker_id));
        }
        self.require_user_exists(booker_id).await?;

        let booking = Booking {
            id: Ulid::new(),
            item_id,
            booker_id,
            span: Span::new(start, end),
            status: BookingStatus::Waiting,
        };
        let created = self.bookings.save(booking).await;

        metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
        debug!(booking_id = %created.id, "booking created");
        Ok(created)
    }

    /// Approve or reject a waiting booking. Only the booked item's owner may
    /// decide; anyone else gets not-found.
    ///
    /// Approval is one-shot: approving an already-approved booking is a bad
    /// request. Rejection is unconditional — re-rejecting, or rejecting an
    /// approved booking, succeeds. Two concurrent decisions race and the
    /// last write wins; the store only guarantees atomic single-record
    /// updates.
    pub async fn set_booking_status(
        &self,
        owner_id: Ulid,
        booking_id: Ulid,
        approved: bool,
    ) -> Result<Booking, EngineError> {
        debug!(%owner_id, %booking_id, approved, "set booking status request");

        self.require_user_exists(owner_id).await?;
        self.require_booking_exists(booking_id).await?;

        let mut booking = self.fetch_booking(booking_id).await?;
        self.require_owner_of(owner_id, &booking).await?;

        if approved {
            if booking.status == BookingStatus::Approved {
                return Err(EngineError::AlreadyApproved(booking_id));
            }
            booking.status = BookingStatus::Approved;
        } else {
            booking.status = BookingStatus::Rejected;
        }

        let updated = self.bookings.save(booking).await;

        metrics::counter!(
            observability::BOOKING_DECISIONS_TOTAL,
            "decision" => if approved { "approved" } else { "rejected" }
        )
        .increment(1);
        debug!(booking_id = %updated.id, status = %updated.status, "booking status set");
        Ok(updated)
    }
}
