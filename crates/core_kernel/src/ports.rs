//! Collaborator ports
//!
//! The mapping core reads exactly two ambient dependencies: the current time
//! and fresh unique identifiers. Both are injected through the traits here so
//! that the transformation stays a deterministic function of its inputs.
//!
//! ```rust
//! use core_kernel::ports::{Clock, FixedClock, IdGenerator, SequenceIdGenerator};
//! use chrono::{TimeZone, Utc};
//! use uuid::Uuid;
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! assert_eq!(clock.now().timestamp(), 1_704_067_200);
//!
//! let ids = SequenceIdGenerator::new(vec![Uuid::nil()]);
//! assert_eq!(ids.next_id(), Uuid::nil());
//! ```

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as whole seconds since the Unix epoch
    fn epoch_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Source of high-entropy unique identifiers
///
/// Every call must return a fresh identifier; implementations never derive
/// one identifier from another.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Wall clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Random (v4) UUID generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generator that hands out a pre-seeded sequence of identifiers
///
/// Once the sequence is exhausted it falls back to random v4 identifiers, so
/// it never repeats a value on its own.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    queue: Mutex<VecDeque<Uuid>>,
}

impl SequenceIdGenerator {
    pub fn new(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            queue: Mutex::new(ids.into_iter().collect()),
        }
    }

    /// Number of seeded identifiers not yet handed out
    pub fn remaining(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Uuid {
        let seeded = match self.queue.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        seeded.unwrap_or_else(Uuid::new_v4)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}
