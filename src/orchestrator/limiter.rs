// Fri Oct 16 2026 - Alex

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;

/// Counting semaphore capping how many scan tasks run at once.
pub struct ConcurrencyLimiter {
    capacity: usize,
    in_use: Mutex<usize>,
    available: Condvar,
}

impl ConcurrencyLimiter {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity: capacity.max(1),
            in_use: Mutex::new(0),
            available: Condvar::new(),
        })
    }

    /// Blocks until a slot is free. The slot is held until the guard drops.
    pub fn acquire(self: &Arc<Self>) -> SlotGuard {
        let mut in_use = self.in_use.lock();
        while *in_use >= self.capacity {
            self.available.wait(&mut in_use);
        }
        *in_use += 1;

        SlotGuard {
            limiter: Arc::clone(self),
        }
    }

    pub fn try_acquire(self: &Arc<Self>) -> Option<SlotGuard> {
        let mut in_use = self.in_use.lock();
        if *in_use >= self.capacity {
            return None;
        }
        *in_use += 1;

        Some(SlotGuard {
            limiter: Arc::clone(self),
        })
    }

    fn release(&self) {
        {
            let mut in_use = self.in_use.lock();
            *in_use = in_use.saturating_sub(1);
        }
        self.available.notify_one();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_use(&self) -> usize {
        *self.in_use.lock()
    }
}

pub struct SlotGuard {
    limiter: Arc<ConcurrencyLimiter>,
}

impl SlotGuard {
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.limiter.release();
    }
}
