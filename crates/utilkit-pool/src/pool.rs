//! # Pool and Lease
//!
//! `Pool<T>` owns the slot storage and the FIFO queue of free indices.
//! `Lease<'_, T>` borrows the pool and carries the slot value out of storage
//! for as long as it lives; dropping it puts the value back and re-queues the
//! index.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::PoolError;

// ─── Statistics ──────────────────────────────────────────────────────

/// Point-in-time view of a pool's occupancy and lifetime counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Total number of slots.
    pub capacity: usize,
    /// Slots currently in the free queue.
    pub available: usize,
    /// Slots currently held by a lease.
    pub leased: usize,
    /// Successful acquisitions since the pool was created.
    pub acquired: u64,
    /// Acquisitions rejected because the free queue was empty.
    pub exhausted: u64,
}

impl PoolStats {
    /// Fraction of slots currently leased (0.0 to 1.0).
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.leased as f64 / self.capacity as f64
        }
    }
}

// ─── Pool ────────────────────────────────────────────────────────────

struct Slots<T> {
    /// `None` while the slot's value is out on a lease.
    storage: Vec<Option<T>>,
    available: VecDeque<usize>,
}

/// A growable set of reusable `T` slots with exclusive lease-based checkout.
///
/// All operations take `&self`; the pool can be grown while leases are
/// outstanding.
///
/// ```
/// use utilkit_pool::Pool;
///
/// #[derive(Default)]
/// struct Connection {
///     host: String,
/// }
///
/// let pool: Pool<Connection> = Pool::with_capacity(2);
/// {
///     let mut conn = pool.acquire().unwrap();
///     conn.host = "localhost".into();
///     assert_eq!(pool.available(), 1);
/// }
/// // The lease went out of scope, so its slot is free again.
/// assert_eq!(pool.available(), 2);
/// ```
pub struct Pool<T> {
    slots: RefCell<Slots<T>>,
    acquired: Cell<u64>,
    exhausted: Cell<u64>,
}

impl<T> Pool<T> {
    /// Create a pool with no slots. Call [`Pool::grow`] before acquiring.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Slots {
                storage: Vec::new(),
                available: VecDeque::new(),
            }),
            acquired: Cell::new(0),
            exhausted: Cell::new(0),
        }
    }

    /// Create a pool pre-filled with `capacity` default-constructed slots.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        let pool = Self::new();
        pool.grow(capacity);
        pool
    }

    /// Ensure the pool holds at least `target_capacity` slots.
    ///
    /// New slots are default-constructed and appended to the back of the
    /// free queue. Existing slots, leased or not, are untouched. Calling this
    /// with a target at or below the current capacity does nothing.
    pub fn grow(&self, target_capacity: usize)
    where
        T: Default,
    {
        let mut slots = self.slots.borrow_mut();
        let current = slots.storage.len();
        if current >= target_capacity {
            return;
        }
        slots.storage.reserve(target_capacity - current);
        for index in current..target_capacity {
            slots.storage.push(Some(T::default()));
            slots.available.push_back(index);
        }
        tracing::debug!(from = current, to = target_capacity, "pool grown");
    }

    /// Lease the next free slot, rebuilding its value with `init`.
    ///
    /// The slot's previous value is dropped before `init` runs. If the free
    /// queue is empty, `init` is not called.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] when every slot is leased.
    pub fn acquire_with<F>(&self, init: F) -> Result<Lease<'_, T>, PoolError>
    where
        F: FnOnce() -> T,
    {
        let (index, previous) = {
            let mut slots = self.slots.borrow_mut();
            let Some(index) = slots.available.pop_front() else {
                let capacity = slots.storage.len();
                self.exhausted.set(self.exhausted.get() + 1);
                tracing::debug!(capacity, "pool exhausted");
                return Err(PoolError::Exhausted { capacity });
            };
            (index, slots.storage[index].take())
        };

        // The lease owns the index from here on, so a panicking
        // constructor still returns the slot to the free queue.
        let mut lease = Lease {
            pool: self,
            index,
            value: None,
        };
        drop(previous);
        lease.value = Some(init());

        self.acquired.set(self.acquired.get() + 1);
        tracing::trace!(index, "slot leased");
        Ok(lease)
    }

    /// Lease the next free slot, rebuilding its value from construction
    /// arguments via `T: From<A>`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] when every slot is leased.
    pub fn acquire_from<A>(&self, args: A) -> Result<Lease<'_, T>, PoolError>
    where
        T: From<A>,
    {
        self.acquire_with(|| T::from(args))
    }

    /// Lease the next free slot, resetting its value to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] when every slot is leased.
    pub fn acquire(&self) -> Result<Lease<'_, T>, PoolError>
    where
        T: Default,
    {
        self.acquire_with(T::default)
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.borrow().storage.len()
    }

    /// Number of slots waiting in the free queue.
    pub fn available(&self) -> usize {
        self.slots.borrow().available.len()
    }

    /// Number of slots currently held by a lease.
    pub fn leased(&self) -> usize {
        let slots = self.slots.borrow();
        slots.storage.len() - slots.available.len()
    }

    /// Snapshot of occupancy and lifetime counters.
    pub fn stats(&self) -> PoolStats {
        let slots = self.slots.borrow();
        PoolStats {
            capacity: slots.storage.len(),
            available: slots.available.len(),
            leased: slots.storage.len() - slots.available.len(),
            acquired: self.acquired.get(),
            exhausted: self.exhausted.get(),
        }
    }

    fn restore(&self, index: usize, value: Option<T>) {
        let mut slots = self.slots.borrow_mut();
        slots.storage[index] = value;
        slots.available.push_back(index);
        tracing::trace!(index, "slot released");
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool").field("stats", &self.stats()).finish()
    }
}

// ─── Lease ───────────────────────────────────────────────────────────

/// Exclusive handle on one pool slot.
///
/// Dereferences to the slot's value. The slot goes back to the free queue
/// exactly once: when the lease is dropped, or when [`Lease::release`]
/// consumes it. A lease cannot be cloned, only moved.
pub struct Lease<'a, T> {
    pool: &'a Pool<T>,
    index: usize,
    /// `Some` for the whole observable lifetime of the lease.
    value: Option<T>,
}

impl<T> Lease<'_, T> {
    /// Index of the leased slot within the pool.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the slot to the pool now instead of at scope end.
    pub fn release(self) {
        drop(self);
    }
}

impl<T> Deref for Lease<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
            .as_ref()
            .expect("lease value is present until the lease is dropped")
    }
}

impl<T> DerefMut for Lease<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
            .as_mut()
            .expect("lease value is present until the lease is dropped")
    }
}

impl<T> Drop for Lease<'_, T> {
    fn drop(&mut self) {
        self.pool.restore(self.index, self.value.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for Lease<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease")
            .field("index", &self.index)
            .field("value", &self.value)
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Connection {
        host: String,
        user: String,
        queries: u32,
    }

    impl From<(&str, &str)> for Connection {
        fn from((host, user): (&str, &str)) -> Self {
            Self {
                host: host.to_string(),
                user: user.to_string(),
                queries: 0,
            }
        }
    }

    // ── Growth ───────────────────────────────────────────────────────

    #[test]
    fn test_new_pool_is_empty() {
        let pool: Pool<Connection> = Pool::new();
        assert_eq!(pool.capacity(), 0);
        assert_eq!(
            pool.acquire().unwrap_err(),
            PoolError::Exhausted { capacity: 0 }
        );
    }

    #[test]
    fn test_grow_creates_free_slots() {
        let pool: Pool<Connection> = Pool::new();
        pool.grow(5);
        assert_eq!(pool.capacity(), 5);
        assert_eq!(pool.available(), 5);
        assert_eq!(pool.leased(), 0);
    }

    #[test]
    fn test_grow_is_idempotent_and_never_shrinks() {
        let pool: Pool<Connection> = Pool::with_capacity(4);
        pool.grow(4);
        assert_eq!(pool.capacity(), 4);
        pool.grow(2);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.available(), 4);
    }

    #[test]
    fn test_grow_while_leased_keeps_lease_intact() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        let mut conn = pool.acquire_from(("db1", "alice")).unwrap();
        conn.queries = 7;

        pool.grow(3);
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.available(), 2);
        assert_eq!(conn.host, "db1");
        assert_eq!(conn.queries, 7);
    }

    // ── Acquire / release ────────────────────────────────────────────

    #[test]
    fn test_acquire_until_exhausted() {
        let pool: Pool<Connection> = Pool::with_capacity(2);
        let _a = pool.acquire().unwrap();
        let _b = pool.acquire().unwrap();
        let err = pool.acquire().unwrap_err();
        assert_eq!(err, PoolError::Exhausted { capacity: 2 });
        assert!(err.to_string().contains("all 2 slots"));
    }

    #[test]
    fn test_exhausted_does_not_run_constructor() {
        let pool: Pool<Connection> = Pool::new();
        let mut called = false;
        let result = pool.acquire_with(|| {
            called = true;
            Connection::default()
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_drop_returns_slot() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        {
            let _conn = pool.acquire().unwrap();
            assert_eq!(pool.available(), 0);
        }
        assert_eq!(pool.available(), 1);
        assert!(pool.acquire().is_ok());
    }

    #[test]
    fn test_release_makes_slot_immediately_available() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        let conn = pool.acquire().unwrap();
        let index = conn.index();
        conn.release();

        let again = pool.acquire().unwrap();
        assert_eq!(again.index(), index);
    }

    #[test]
    fn test_free_queue_is_fifo() {
        let pool: Pool<Connection> = Pool::with_capacity(3);
        let a = pool.acquire().unwrap();
        let _b = pool.acquire().unwrap();
        assert_eq!(a.index(), 0);

        // Free queue is now [2]; releasing slot 0 appends it: [2, 0].
        a.release();
        assert_eq!(pool.acquire().unwrap().index(), 2);
    }

    #[test]
    fn test_released_slot_goes_to_back_of_queue() {
        let pool: Pool<Connection> = Pool::with_capacity(3);
        let a = pool.acquire().unwrap();
        assert_eq!(a.index(), 0);
        a.release();

        let first = pool.acquire().unwrap();
        let second = pool.acquire().unwrap();
        let third = pool.acquire().unwrap();
        assert_eq!(
            [first.index(), second.index(), third.index()],
            [1, 2, 0]
        );
    }

    #[test]
    fn test_acquire_from_uses_construction_args() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        let conn = pool.acquire_from(("localhost", "user1")).unwrap();
        assert_eq!(conn.host, "localhost");
        assert_eq!(conn.user, "user1");
    }

    #[test]
    fn test_acquire_rebuilds_value() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        {
            let mut conn = pool.acquire_from(("localhost", "user1")).unwrap();
            conn.queries = 42;
        }
        let conn = pool.acquire_from(("localhost", "user1")).unwrap();
        assert_eq!(conn.queries, 0);

        drop(conn);
        let conn = pool.acquire().unwrap();
        assert_eq!(*conn, Connection::default());
    }

    #[test]
    fn test_leases_are_distinct_slots() {
        let pool: Pool<Connection> = Pool::with_capacity(3);
        let mut a = pool.acquire().unwrap();
        let mut b = pool.acquire().unwrap();
        a.queries = 1;
        b.queries = 2;
        assert_ne!(a.index(), b.index());
        assert_eq!(a.queries, 1);
        assert_eq!(b.queries, 2);
    }

    // ── Ownership and exit paths ─────────────────────────────────────

    fn checkout(pool: &Pool<Connection>) -> Lease<'_, Connection> {
        pool.acquire_from(("replica", "svc")).unwrap()
    }

    #[test]
    fn test_lease_moves_out_of_function() {
        let pool: Pool<Connection> = Pool::with_capacity(2);
        let conn = checkout(&pool);
        assert_eq!(conn.host, "replica");
        assert_eq!(pool.leased(), 1);

        let moved = conn;
        assert_eq!(pool.leased(), 1);
        drop(moved);
        assert_eq!(pool.leased(), 0);
    }

    #[test]
    fn test_lease_returned_on_early_return() {
        fn use_then_fail(pool: &Pool<Connection>) -> Result<(), PoolError> {
            let _conn = pool.acquire()?;
            let _second = pool.acquire()?;
            Ok(())
        }

        let pool: Pool<Connection> = Pool::with_capacity(1);
        assert!(use_then_fail(&pool).is_err());
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_lease_returned_on_unwind() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _conn = pool.acquire().unwrap();
            panic!("caller failed while holding a lease");
        }));
        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_panicking_constructor_returns_slot() {
        let pool: Pool<Connection> = Pool::with_capacity(1);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = pool.acquire_with(|| panic!("constructor failed"));
        }));
        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
        assert!(pool.acquire().is_ok());
    }

    // ── Statistics ───────────────────────────────────────────────────

    #[test]
    fn test_stats_counters() {
        let pool: Pool<Connection> = Pool::with_capacity(2);
        let a = pool.acquire().unwrap();
        let _b = pool.acquire().unwrap();
        let _ = pool.acquire();
        a.release();

        let stats = pool.stats();
        assert_eq!(stats.capacity, 2);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.leased, 1);
        assert_eq!(stats.acquired, 2);
        assert_eq!(stats.exhausted, 1);
        assert!((stats.utilization() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_utilization_of_empty_pool() {
        let pool: Pool<u8> = Pool::new();
        assert_eq!(pool.stats().utilization(), 0.0);
    }

    #[test]
    fn test_stats_serde() {
        let pool: Pool<u8> = Pool::with_capacity(3);
        let json = serde_json::to_value(pool.stats()).unwrap();
        assert_eq!(json["capacity"], 3);
        assert_eq!(json["leased"], 0);
    }
}
