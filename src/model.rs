use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Closed interval `[start, end]` of a booking.
///
/// Booking boundaries are inclusive: a booking whose `start` or `end` equals
/// the query instant counts as current, never past or future. `end == start`
/// is a legal zero-length booking; `end < start` fails validation upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn is_past(&self, now: Ms) -> bool {
        self.end < now
    }

    pub fn is_future(&self, now: Ms) -> bool {
        self.start > now
    }

    pub fn is_current(&self, now: Ms) -> bool {
        self.start <= now && now <= self.end
    }
}

/// Lifecycle state of a booking.
///
/// Starts at `Waiting`. The item owner moves it to `Approved` (once) or
/// `Rejected`; rejection is permitted repeatedly and even after approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Waiting => write!(f, "WAITING"),
            BookingStatus::Approved => write!(f, "APPROVED"),
            BookingStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A booking of one item by one user over one time span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub item_id: Ulid,
    pub booker_id: Ulid,
    pub span: Span,
    pub status: BookingStatus,
}

/// Query-time classification of bookings — never persisted.
///
/// The temporal partitions (`Current`/`Past`/`Future`) are recomputed against
/// the query's "now" on every call. At any instant the three of them split a
/// user's bookings exhaustively and without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl Category {
    /// Single parameterized filter replacing one query shape per category.
    pub fn admits(&self, booking: &Booking, now: Ms) -> bool {
        match self {
            Category::All => true,
            Category::Current => booking.span.is_current(now),
            Category::Past => booking.span.is_past(now),
            Category::Future => booking.span.is_future(now),
            Category::Waiting => booking.status == BookingStatus::Waiting,
            Category::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

/// Raised by [`Category::from_str`] for strings naming no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown booking category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive mapping for transport layers. Unrecognized strings
    /// must be rejected before reaching the engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Category::All),
            "CURRENT" => Ok(Category::Current),
            "PAST" => Ok(Category::Past),
            "FUTURE" => Ok(Category::Future),
            "WAITING" => Ok(Category::Waiting),
            "REJECTED" => Ok(Category::Rejected),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Offset + size over the `start`-descending ordering of a result set.
///
/// `from` is a zero-based element offset, not a page number. Absence of a
/// `Page` means the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub from: i64,
    pub size: i64,
}

impl Page {
    pub fn new(from: i64, size: i64) -> Self {
        Self { from, size }
    }

    pub fn is_valid(&self) -> bool {
        self.from >= 0 && self.size >= 1
    }

    /// Index range `[from, from + size)` clamped to `len`.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let from = (self.from.max(0) as usize).min(len);
        let to = from.saturating_add(self.size.max(0) as usize).min(len);
        from..to
    }
}

// ── Directory record types ───────────────────────────────────────

/// What the core needs to know about a user: that it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Ulid,
    pub name: Option<String>,
}

/// Catalog entry for a bookable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Ulid,
    pub owner_id: Ulid,
    /// Availability flag checked at booking creation only; never re-checked
    /// against overlapping bookings.
    pub available: bool,
    pub name: Option<String>,
}
