mod error;
mod guards;
mod mutations;
mod queries;

pub use error::{EngineError, ErrorKind};

use std::sync::Arc;

use crate::clock::TimeSource;
use crate::directory::{ItemDirectory, UserDirectory};
use crate::store::{BookingStore, InMemoryStore};

/// The booking core: state machine, authorization rules and the temporal
/// query engine, over injected collaborators.
///
/// Every operation is a short-lived request-response unit of work; the engine
/// keeps no state of its own and no long-lived reference to any booking.
pub struct Engine {
    pub(super) users: Arc<dyn UserDirectory>,
    pub(super) items: Arc<dyn ItemDirectory>,
    pub(super) bookings: Arc<dyn BookingStore>,
    pub(super) clock: Arc<dyn TimeSource>,
}

impl Engine {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        items: Arc<dyn ItemDirectory>,
        bookings: Arc<dyn BookingStore>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            users,
            items,
            bookings,
            clock,
        }
    }

    /// Wire one [`InMemoryStore`] into all three collaborator roles.
    pub fn with_store(store: Arc<InMemoryStore>, clock: Arc<dyn TimeSource>) -> Self {
        Self::new(store.clone(), store.clone(), store, clock)
    }
}
