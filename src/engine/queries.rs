use tracing::debug;
use ulid::Ulid;

use crate::model::{Booking, Category, Page};
use crate::observability;

use super::{Engine, EngineError};

impl Engine {
    /// Fetch one booking. Visible to the booker and the item owner only;
    /// everyone else — including users probing for ids — gets not-found.
    pub async fn get_booking(
        &self,
        requester_id: Ulid,
        booking_id: Ulid,
    ) -> Result<Booking, EngineError> {
        debug!(%requester_id, %booking_id, "get booking request");

        self.require_user_exists(requester_id).await?;
        let booking = self.fetch_booking(booking_id).await?;
        self.require_booker_or_owner(requester_id, &booking).await?;
        Ok(booking)
    }

    /// Bookings placed by this user, filtered by `category` against the
    /// injected clock's "now", ordered by `start` descending.
    ///
    /// `page`, when given, restricts the result to `[from, from + size)` of
    /// that same ordering. No matches is an empty vec, not an error.
    pub async fn list_by_booker(
        &self,
        user_id: Ulid,
        category: Category,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, EngineError> {
        debug!(%user_id, ?category, ?page, "list bookings by booker");

        self.require_user_exists(user_id).await?;
        self.require_valid_page(page)?;

        let now = self.clock.now();
        let started = std::time::Instant::now();
        let found = self
            .bookings
            .find_by_booker(user_id, category, now, page)
            .await;
        self.record_query("booker", category, started);

        debug!(%user_id, count = found.len(), "bookings by booker found");
        Ok(found)
    }

    /// Bookings on items owned by this user. Same category and paging
    /// semantics as [`list_by_booker`](Engine::list_by_booker), but the user
    /// must own at least one item — owning none is not-found, which
    /// distinguishes "not a lessor" from "a lessor with no bookings".
    pub async fn list_by_owner(
        &self,
        user_id: Ulid,
        category: Category,
        page: Option<Page>,
    ) -> Result<Vec<Booking>, EngineError> {
        debug!(%user_id, ?category, ?page, "list bookings by owner");

        self.require_user_exists(user_id).await?;
        self.require_owns_items(user_id).await?;
        self.require_valid_page(page)?;

        let now = self.clock.now();
        let started = std::time::Instant::now();
        let found = self
            .bookings
            .find_by_owner(user_id, category, now, page)
            .await;
        self.record_query("owner", category, started);

        debug!(%user_id, count = found.len(), "bookings by owner found");
        Ok(found)
    }

    fn record_query(&self, scope: &'static str, category: Category, started: std::time::Instant) {
        metrics::counter!(
            observability::BOOKING_QUERIES_TOTAL,
            "scope" => scope,
            "category" => observability::category_label(category)
        )
        .increment(1);
        metrics::histogram!(
            observability::QUERY_DURATION_SECONDS,
            "scope" => scope
        )
        .record(started.elapsed().as_secs_f64());
    }
}
