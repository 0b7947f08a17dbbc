use async_trait::async_trait;
use ulid::Ulid;

/// Existence checks for user accounts. Account CRUD lives in an external
/// collaborator; the booking core only asks whether an id is real.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn exists(&self, user_id: Ulid) -> bool;
}

/// Lookup surface of the item catalog consumed by the booking core.
#[async_trait]
pub trait ItemDirectory: Send + Sync {
    async fn exists(&self, item_id: Ulid) -> bool;

    /// The item's availability flag. `false` for unknown items.
    async fn is_available(&self, item_id: Ulid) -> bool;

    /// Owner of the item, or `None` for unknown items.
    async fn owner_of(&self, item_id: Ulid) -> Option<Ulid>;

    /// How many items this user owns. Distinguishes "owns items but has no
    /// bookings" from "not a lessor at all".
    async fn count_owned_by(&self, user_id: Ulid) -> usize;
}
