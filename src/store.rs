use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::directory::{ItemDirectory, UserDirectory};
use crate::model::{Booking, Category, Item, Ms, Page, User};

/// Persistence of booking records.
///
/// The two category finders subsume one query shape per
/// category × scope × paging combination: the store receives the category
/// tag and the caller's "now" and applies filter, `start`-descending order
/// and the optional page itself (a SQL-backed implementation would push all
/// three into the query).
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert or update. Returns the stored record.
    async fn save(&self, booking: Booking) -> Booking;

    async fn find_by_id(&self, id: Ulid) -> Option<Booking>;

    async fn exists_by_id(&self, id: Ulid) -> bool;

    /// Bookings placed by `booker_id` matching `category` at `now`,
    /// ordered by `span.start` descending, restricted to `page` if given.
    async fn find_by_booker(
        &self,
        booker_id: Ulid,
        category: Category,
        now: Ms,
        page: Option<Page>,
    ) -> Vec<Booking>;

    /// Bookings on items owned by `owner_id`; same semantics as
    /// [`find_by_booker`](BookingStore::find_by_booker).
    async fn find_by_owner(
        &self,
        owner_id: Ulid,
        category: Category,
        now: Ms,
        page: Option<Page>,
    ) -> Vec<Booking>;
}

/// In-memory users + items + bookings behind the collaborator traits.
///
/// Reference implementation used by the test suite and by embedders that
/// don't bring their own persistence.
#[derive(Default)]
pub struct InMemoryStore {
    users: DashMap<Ulid, User>,
    items: DashMap<Ulid, Item>,
    bookings: DashMap<Ulid, Booking>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Seeding ──────────────────────────────────────────────

    pub fn add_user(&self, user: User) -> Ulid {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    pub fn add_item(&self, item: Item) -> Ulid {
        let id = item.id;
        self.items.insert(id, item);
        id
    }

    pub fn set_item_available(&self, item_id: Ulid, available: bool) {
        if let Some(mut item) = self.items.get_mut(&item_id) {
            item.available = available;
        }
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    /// Filter, order `start` descending, then page.
    fn select(
        &self,
        category: Category,
        now: Ms,
        page: Option<Page>,
        scope: impl Fn(&Booking) -> bool,
    ) -> Vec<Booking> {
        let mut hits: Vec<Booking> = self
            .bookings
            .iter()
            .map(|e| e.value().clone())
            .filter(|b| scope(b) && category.admits(b, now))
            .collect();
        hits.sort_by(|a, b| b.span.start.cmp(&a.span.start));
        match page {
            Some(p) => hits[p.range(hits.len())].to_vec(),
            None => hits,
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryStore {
    async fn exists(&self, user_id: Ulid) -> bool {
        self.users.contains_key(&user_id)
    }
}

#[async_trait]
impl ItemDirectory for InMemoryStore {
    async fn exists(&self, item_id: Ulid) -> bool {
        self.items.contains_key(&item_id)
    }

    async fn is_available(&self, item_id: Ulid) -> bool {
        self.items.get(&item_id).is_some_and(|i| i.available)
    }

    async fn owner_of(&self, item_id: Ulid) -> Option<Ulid> {
        self.items.get(&item_id).map(|i| i.owner_id)
    }

    async fn count_owned_by(&self, user_id: Ulid) -> usize {
        self.items
            .iter()
            .filter(|e| e.value().owner_id == user_id)
            .count()
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn save(&self, booking: Booking) -> Booking {
        self.bookings.insert(booking.id, booking.clone());
        booking
    }

    async fn find_by_id(&self, id: Ulid) -> Option<Booking> {
        self.bookings.get(&id).map(|e| e.value().clone())
    }

    async fn exists_by_id(&self, id: Ulid) -> bool {
        self.bookings.contains_key(&id)
    }

    async fn find_by_booker(
        &self,
        booker_id: Ulid,
        category: Category,
        now: Ms,
        page: Option<Page>,
    ) -> Vec<Booking> {
        self.select(category, now, page, |b| b.booker_id == booker_id)
    }

    async fn find_by_owner(
        &self,
        owner_id: Ulid,
        category: Category,
        now: Ms,
        page: Option<Page>,
    ) -> Vec<Booking> {
        // Resolve item ownership through the catalog side of this store.
        self.select(category, now, page, |b| {
            self.items
                .get(&b.item_id)
                .is_some_and(|i| i.owner_id == owner_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, Span};

    fn user() -> User {
        User {
            id: Ulid::new(),
            name: None,
        }
    }

    fn item(owner_id: Ulid) -> Item {
        Item {
            id: Ulid::new(),
            owner_id,
            available: true,
            name: None,
        }
    }

    fn booking(item_id: Ulid, booker_id: Ulid, start: Ms, end: Ms) -> Booking {
        Booking {
            id: Ulid::new(),
            item_id,
            booker_id,
            span: Span::new(start, end),
            status: BookingStatus::Waiting,
        }
    }

    #[tokio::test]
    async fn save_then_find_round_trip() {
        let store = InMemoryStore::new();
        let b = booking(Ulid::new(), Ulid::new(), 100, 200);
        let saved = store.save(b.clone()).await;
        assert_eq!(saved, b);
        assert_eq!(store.find_by_id(b.id).await, Some(b.clone()));
        assert!(store.exists_by_id(b.id).await);
        assert!(!store.exists_by_id(Ulid::new()).await);
    }

    #[tokio::test]
    async fn exists_agrees_with_find() {
        let store = InMemoryStore::new();
        let b = booking(Ulid::new(), Ulid::new(), 100, 200);
        store.save(b.clone()).await;
        for id in [b.id, Ulid::new()] {
            assert_eq!(store.exists_by_id(id).await, store.find_by_id(id).await.is_some());
        }
    }

    #[tokio::test]
    async fn booker_results_sorted_start_descending() {
        let store = InMemoryStore::new();
        let booker = Ulid::new();
        for start in [300, 100, 200] {
            store
                .save(booking(Ulid::new(), booker, start, start + 50))
                .await;
        }
        let found = store
            .find_by_booker(booker, Category::All, 0, None)
            .await;
        let starts: Vec<Ms> = found.iter().map(|b| b.span.start).collect();
        assert_eq!(starts, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn owner_scope_resolves_through_catalog() {
        let store = InMemoryStore::new();
        let owner = store.add_user(user());
        let other_owner = store.add_user(user());
        let booker = store.add_user(user());
        let owned = store.add_item(item(owner));
        let foreign = store.add_item(item(other_owner));

        store.save(booking(owned, booker, 100, 200)).await;
        store.save(booking(foreign, booker, 300, 400)).await;

        let found = store.find_by_owner(owner, Category::All, 0, None).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item_id, owned);
    }

    #[tokio::test]
    async fn category_filter_applied_per_scope() {
        let store = InMemoryStore::new();
        let booker = Ulid::new();
        let now = 1_000;

        store.save(booking(Ulid::new(), booker, 100, 200)).await; // past
        store.save(booking(Ulid::new(), booker, 900, 1_100)).await; // current
        store.save(booking(Ulid::new(), booker, 2_000, 3_000)).await; // future

        assert_eq!(
            store
                .find_by_booker(booker, Category::Past, now, None)
                .await
                .len(),
            1
        );
        assert_eq!(
            store
                .find_by_booker(booker, Category::Current, now, None)
                .await
                .len(),
            1
        );
        assert_eq!(
            store
                .find_by_booker(booker, Category::Future, now, None)
                .await
                .len(),
            1
        );
        assert_eq!(
            store
                .find_by_booker(booker, Category::All, now, None)
                .await
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn page_slices_the_descending_order() {
        let store = InMemoryStore::new();
        let booker = Ulid::new();
        for start in [100, 200, 300, 400, 500] {
            store
                .save(booking(Ulid::new(), booker, start, start + 10))
                .await;
        }
        let middle = store
            .find_by_booker(booker, Category::All, 0, Some(Page::new(1, 2)))
            .await;
        let starts: Vec<Ms> = middle.iter().map(|b| b.span.start).collect();
        assert_eq!(starts, vec![400, 300]);

        let past_end = store
            .find_by_booker(booker, Category::All, 0, Some(Page::new(10, 3)))
            .await;
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn unavailable_item_stays_in_catalog() {
        let store = InMemoryStore::new();
        let owner = Ulid::new();
        let item_id = store.add_item(item(owner));
        assert!(ItemDirectory::is_available(&store, item_id).await);
        store.set_item_available(item_id, false);
        assert!(ItemDirectory::exists(&store, item_id).await);
        assert!(!ItemDirectory::is_available(&store, item_id).await);
        assert_eq!(store.owner_of(item_id).await, Some(owner));
    }
}
