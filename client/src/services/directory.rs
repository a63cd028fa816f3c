//! # Seller Directory
//!
//! The list of known sellers, populated by whichever screen most recently
//! fetched `GET /api/v0.1/user`.
//!
//! Every write replaces the whole list together with the server's `sellerIds`,
//! which is what seller ids are checked against; it may name sellers whose
//! details were not included in `sellerData`. Two screens may fetch concurrently, so
//! each fetch takes a [`FetchTicket`] when it starts and presents it when it
//! writes; a write older than the last applied one is rejected instead of
//! silently overwriting newer data.
//!
//! The directory is an owned, cloneable handle. Clones share the same list;
//! separate [`SellerDirectory::new`] calls are fully isolated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{Seller, UsersResponse};

/// Monotonic sequence number taken when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Snapshot {
    sellers: Vec<Seller>,
    seller_ids: Vec<u64>,
    applied: Option<FetchTicket>,
}

#[derive(Debug, Clone, Default)]
pub struct SellerDirectory {
    snapshot: Arc<RwLock<Snapshot>>,
    next_sequence: Arc<AtomicU64>,
}

impl SellerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a sequence number for a fetch that is about to start
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_sequence.fetch_add(1, Ordering::SeqCst))
    }

    /// Replace the directory unconditionally (takes a fresh ticket)
    pub fn replace(&self, users: UsersResponse) {
        let ticket = self.begin_fetch();
        self.replace_with_ticket(ticket, users);
    }

    /// Replace the directory if `ticket` is not older than the last applied write.
    ///
    /// Returns `false` when the write was rejected as stale.
    pub fn replace_with_ticket(&self, ticket: FetchTicket, users: UsersResponse) -> bool {
        let mut snapshot = self.snapshot.write();

        if let Some(applied) = snapshot.applied {
            if ticket < applied {
                tracing::warn!(
                    ticket = ticket.sequence(),
                    applied = applied.sequence(),
                    "Rejected stale seller directory write"
                );
                return false;
            }
        }

        let UsersResponse {
            seller_data: sellers,
            mut seller_ids,
        } = users;
        seller_ids.sort_unstable();
        seller_ids.dedup();

        tracing::debug!(
            ticket = ticket.sequence(),
            sellers = sellers.len(),
            seller_ids = seller_ids.len(),
            "Seller directory replaced"
        );

        snapshot.sellers = sellers;
        snapshot.seller_ids = seller_ids;
        snapshot.applied = Some(ticket);
        true
    }

    pub fn get(&self) -> Vec<Seller> {
        self.snapshot.read().sellers.clone()
    }

    /// Sorted, de-duplicated numeric ids the server listed in the current snapshot
    pub fn seller_ids(&self) -> Vec<u64> {
        self.snapshot.read().seller_ids.clone()
    }

    pub fn contains(&self, seller_numeric_id: u64) -> bool {
        self.snapshot
            .read()
            .seller_ids
            .binary_search(&seller_numeric_id)
            .is_ok()
    }

    pub fn is_empty(&self) -> bool {
        let snapshot = self.snapshot.read();
        snapshot.sellers.is_empty() && snapshot.seller_ids.is_empty()
    }

    /// Drop all sellers. Ordering state is kept so in-flight fetches that started
    /// before the clear can still land.
    pub fn clear(&self) {
        let mut snapshot = self.snapshot.write();
        snapshot.sellers.clear();
        snapshot.seller_ids.clear();
    }
}
