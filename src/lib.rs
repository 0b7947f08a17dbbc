//! Booking lifecycle and availability-query core for a peer-to-peer
//! item-sharing service.
//!
//! Users list items, other users place time-bounded bookings, item owners
//! approve or reject them. This crate is the core behind that flow: the
//! booking state machine, the authorization rules gating every operation,
//! and the temporal query engine answering "all bookings for booker/owner
//! matching category X", optionally paginated.
//!
//! Transport (HTTP, CLI) and real persistence are external: the [`Engine`]
//! consumes injected [`directory`] and [`store`] collaborators and maps every
//! failure to an [`ErrorKind`] a transport can translate to a status code.

pub mod clock;
pub mod directory;
pub mod engine;
pub mod model;
pub mod observability;
pub mod store;

pub use clock::{SystemClock, TimeSource};
pub use engine::{Engine, EngineError, ErrorKind};
pub use model::{Booking, BookingStatus, Category, Item, Ms, Page, Span, UnknownCategory, User};
pub use store::{BookingStore, InMemoryStore};
