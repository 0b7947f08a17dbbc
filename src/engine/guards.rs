//! Shared validation and authorization guards.
//!
//! Each guard either passes or produces one deterministic [`EngineError`].
//! Authorization guards report [`EngineError::kind`] `NotFound`, never a
//! distinct forbidden kind: callers without visibility must not learn that
//! the booking exists.

use ulid::Ulid;

use crate::model::{Booking, Ms, Page};

use super::{Engine, EngineError};

impl Engine {
    pub(super) async fn require_user_exists(&self, user_id: Ulid) -> Result<(), EngineError> {
        if !self.users.exists(user_id).await {
            return Err(EngineError::UserNotFound(user_id));
        }
        Ok(())
    }

    pub(super) async fn require_item_exists(&self, item_id: Ulid) -> Result<(), EngineError> {
        if !self.items.exists(item_id).await {
            return Err(EngineError::ItemNotFound(item_id));
        }
        Ok(())
    }

    pub(super) async fn require_item_available(&self, item_id: Ulid) -> Result<(), EngineError> {
        if !self.items.is_available(item_id).await {
            return Err(EngineError::ItemUnavailable(item_id));
        }
        Ok(())
    }

    pub(super) async fn require_booking_exists(&self, booking_id: Ulid) -> Result<(), EngineError> {
        if !self.bookings.exists_by_id(booking_id).await {
            return Err(EngineError::BookingNotFound(booking_id));
        }
        Ok(())
    }

    /// Fetch a booking or report it missing.
    pub(super) async fn fetch_booking(&self, booking_id: Ulid) -> Result<Booking, EngineError> {
        self.bookings
            .find_by_id(booking_id)
            .await
            .ok_or(EngineError::BookingNotFound(booking_id))
    }

    pub(super) async fn require_owns_items(&self, user_id: Ulid) -> Result<(), EngineError> {
        if self.items.count_owned_by(user_id).await == 0 {
            return Err(EngineError::NoOwnedItems(user_id));
        }
        Ok(())
    }

    /// The user must own the booked item.
    pub(super) async fn require_owner_of(
        &self,
        user_id: Ulid,
        booking: &Booking,
    ) -> Result<(), EngineError> {
        if self.items.owner_of(booking.item_id).await != Some(user_id) {
            return Err(EngineError::NotItemOwner {
                booking_id: booking.id,
                user_id,
            });
        }
        Ok(())
    }

    /// The user must be the booking's booker or the booked item's owner.
    pub(super) async fn require_booker_or_owner(
        &self,
        user_id: Ulid,
        booking: &Booking,
    ) -> Result<(), EngineError> {
        if booking.booker_id == user_id {
            return Ok(());
        }
        if self.items.owner_of(booking.item_id).await == Some(user_id) {
            return Ok(());
        }
        Err(EngineError::NotBookerOrOwner(booking.id))
    }

    pub(super) fn require_valid_range(&self, start: Ms, end: Ms) -> Result<(), EngineError> {
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(())
    }

    pub(super) fn require_valid_page(&self, page: Option<Page>) -> Result<(), EngineError> {
        if let Some(p) = page
            && !p.is_valid()
        {
            return Err(EngineError::InvalidPage {
                from: p.from,
                size: p.size,
            });
        }
        Ok(())
    }
}
