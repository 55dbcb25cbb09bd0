//! Shared random source.
//!
//! Prompt selection, emoji choice and member sampling all draw from one
//! `StdRng`. It sits behind a std `Mutex` so it can be shared across tasks;
//! the lock is only ever held inside [`SharedRng::with`], never across an
//! `.await`.

use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Seeds from the operating system.
    pub fn from_os() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic source for replaying a run.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// A poisoned lock is recovered; the generator state stays usable after a
    /// panic elsewhere.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}
