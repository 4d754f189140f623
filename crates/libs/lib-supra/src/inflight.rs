//! Single-slot in-flight token.
//!
//! At most one holder at a time. A caller that finds the slot taken is
//! expected to give up rather than wait.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct InFlightSlot {
    busy: Cell<bool>,
}

/// Frees the slot when dropped.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    slot: &'a InFlightSlot,
}

impl InFlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the slot, or `None` if someone already holds it.
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlightGuard { slot: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_until_release() {
        let slot = InFlightSlot::new();

        let guard = slot.try_acquire().expect("slot is free");
        assert!(slot.is_busy());
        assert!(slot.try_acquire().is_none());

        drop(guard);
        assert!(!slot.is_busy());
        assert!(slot.try_acquire().is_some());
    }
}
