use ulid::Ulid;

use crate::model::Ms;

/// Coarse error classes a transport maps to external statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad range, bad page, double approval, unavailable item.
    BadRequest,
    /// Missing entity, or a requester without visibility. Authorization
    /// failures report not-found on purpose so unauthorized callers can't
    /// probe for existence.
    NotFound,
    /// Identity-uniqueness violations in the user-management collaborator.
    /// Never produced by the booking core itself.
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    UserNotFound(Ulid),
    ItemNotFound(Ulid),
    BookingNotFound(Ulid),
    ItemUnavailable(Ulid),
    /// Booker and item owner are the same user.
    OwnItemBooking(Ulid),
    /// Requester is neither the booking's booker nor the item's owner.
    NotBookerOrOwner(Ulid),
    /// The booking's item is not owned by this user.
    NotItemOwner { booking_id: Ulid, user_id: Ulid },
    NoOwnedItems(Ulid),
    AlreadyApproved(Ulid),
    InvalidRange { start: Ms, end: Ms },
    InvalidPage { from: i64, size: i64 },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ItemUnavailable(_)
            | EngineError::AlreadyApproved(_)
            | EngineError::InvalidRange { .. }
            | EngineError::InvalidPage { .. } => ErrorKind::BadRequest,
            EngineError::UserNotFound(_)
            | EngineError::ItemNotFound(_)
            | EngineError::BookingNotFound(_)
            | EngineError::OwnItemBooking(_)
            | EngineError::NotBookerOrOwner(_)
            | EngineError::NotItemOwner { .. }
            | EngineError::NoOwnedItems(_) => ErrorKind::NotFound,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::UserNotFound(id) => write!(f, "user not found: {id}"),
            EngineError::ItemNotFound(id) => write!(f, "item not found: {id}"),
            EngineError::BookingNotFound(id) => write!(f, "booking not found: {id}"),
            EngineError::ItemUnavailable(id) => write!(f, "item is not available: {id}"),
            EngineError::OwnItemBooking(id) => {
                write!(f, "user {id} cannot book their own item")
            }
            EngineError::NotBookerOrOwner(id) => {
                write!(f, "booking not found: {id}")
            }
            EngineError::NotItemOwner { booking_id, user_id } => {
                write!(
                    f,
                    "item in booking {booking_id} is not owned by user {user_id}"
                )
            }
            EngineError::NoOwnedItems(id) => {
                write!(f, "user {id} does not own any items")
            }
            EngineError::AlreadyApproved(id) => {
                write!(f, "booking is already approved: {id}")
            }
            EngineError::InvalidRange { start, end } => {
                write!(f, "booking end {end} precedes start {start}")
            }
            EngineError::InvalidPage { from, size } => {
                write!(f, "invalid pagination parameters: from={from}, size={size}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_every_variant() {
        let id = Ulid::new();
        let bad: [EngineError; 4] = [
            EngineError::ItemUnavailable(id),
            EngineError::AlreadyApproved(id),
            EngineError::InvalidRange { start: 10, end: 5 },
            EngineError::InvalidPage { from: -1, size: 0 },
        ];
        for e in bad {
            assert_eq!(e.kind(), ErrorKind::BadRequest);
        }
        let missing: [EngineError; 7] = [
            EngineError::UserNotFound(id),
            EngineError::ItemNotFound(id),
            EngineError::BookingNotFound(id),
            EngineError::OwnItemBooking(id),
            EngineError::NotBookerOrOwner(id),
            EngineError::NotItemOwner { booking_id: id, user_id: id },
            EngineError::NoOwnedItems(id),
        ];
        for e in missing {
            assert_eq!(e.kind(), ErrorKind::NotFound);
        }
    }

    #[test]
    fn authorization_failure_reads_as_not_found() {
        let id = Ulid::new();
        // Same wording as a genuinely missing booking — no existence leak.
        assert_eq!(
            EngineError::NotBookerOrOwner(id).to_string(),
            EngineError::BookingNotFound(id).to_string()
        );
    }
}
