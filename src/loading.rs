//! Loading Indicator
//!
//! Counts in-flight requests. A `LoadingGuard` is held across each call and
//! releases its slot on drop, so the indicator clears on every exit path.

use leptos::prelude::*;

/// Something that tracks how many requests are running
pub trait InFlight {
    fn acquire(&self);
    fn release(&self);
}

impl InFlight for RwSignal<u32> {
    fn acquire(&self) {
        self.update(|n| *n += 1);
    }

    fn release(&self) {
        self.update(|n| *n = n.saturating_sub(1));
    }
}

/// Keeps the loading indicator visible while alive
pub struct LoadingGuard<'a, C: InFlight> {
    counter: &'a C,
}

impl<'a, C: InFlight> LoadingGuard<'a, C> {
    pub fn acquire(counter: &'a C) -> Self {
        counter.acquire();
        Self { counter }
    }
}

impl<C: InFlight> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        self.counter.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter(Cell<u32>);

    impl InFlight for Counter {
        fn acquire(&self) {
            self.0.set(self.0.get() + 1);
        }

        fn release(&self) {
            self.0.set(self.0.get().saturating_sub(1));
        }
    }

    fn failing_call(counter: &Counter, seen: &Cell<u32>) -> Result<(), String> {
        let _guard = LoadingGuard::acquire(counter);
        seen.set(counter.0.get());
        "not a number".parse::<u32>().map_err(|e| e.to_string())?;
        Ok(())
    }

    #[test]
    fn test_visible_only_while_guard_lives() {
        let counter = Counter::default();
        {
            let _guard = LoadingGuard::acquire(&counter);
            assert_eq!(counter.0.get(), 1);
        }
        assert_eq!(counter.0.get(), 0);
    }

    #[test]
    fn test_released_on_error_path() {
        let counter = Counter::default();
        let seen = Cell::new(0);
        assert!(failing_call(&counter, &seen).is_err());
        assert_eq!(seen.get(), 1);
        assert_eq!(counter.0.get(), 0);
    }

    #[test]
    fn test_overlapping_requests_keep_indicator_on() {
        let counter = Counter::default();
        let first = LoadingGuard::acquire(&counter);
        let second = LoadingGuard::acquire(&counter);
        drop(first);
        assert_eq!(counter.0.get(), 1);
        drop(second);
        assert_eq!(counter.0.get(), 0);
    }
}
