//! Cancellable delayed reloads, one per row.
//!
//! An update may ask for a reconciliation reload some time later. The
//! deadline is tied to the row that triggered it: deleting the row, or a
//! load that no longer returns it, cancels the reload.

use std::collections::HashMap;
use std::time::Instant;

use crate::types::TodoId;

#[derive(Debug, Clone, Default)]
pub struct ReloadSchedule {
    due: HashMap<TodoId, Instant>,
}

impl ReloadSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reload for `id`, replacing any earlier deadline for it.
    pub fn schedule(&mut self, id: TodoId, at: Instant) {
        self.due.insert(id, at);
    }

    pub fn cancel(&mut self, id: TodoId) -> bool {
        self.due.remove(&id).is_some()
    }

    /// Keep only the reloads whose row still satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(TodoId) -> bool) {
        self.due.retain(|id, _| keep(*id));
    }

    /// Remove and return every reload due at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<TodoId> {
        let ready: Vec<TodoId> = self
            .due
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &ready {
            self.due.remove(id);
        }
        ready
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.due.values().min().copied()
    }

    pub fn is_scheduled(&self, id: TodoId) -> bool {
        self.due.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.due.len()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use uuid::Uuid;

    #[test]
    fn only_elapsed_reloads_are_taken() {
        let start = Instant::now();
        let mut schedule = ReloadSchedule::new();
        schedule.schedule(Uuid::from_u128(1), start + Duration::from_secs(1));
        schedule.schedule(Uuid::from_u128(2), start + Duration::from_secs(5));

        assert!(schedule.take_due(start).is_empty());
        assert_eq!(
            schedule.take_due(start + Duration::from_secs(3)),
            vec![Uuid::from_u128(1)]
        );
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.next_due(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let start = Instant::now();
        let id = Uuid::from_u128(1);
        let mut schedule = ReloadSchedule::new();
        schedule.schedule(id, start + Duration::from_secs(1));
        schedule.schedule(id, start + Duration::from_secs(10));

        assert_eq!(schedule.len(), 1);
        assert!(schedule.take_due(start + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn cancelled_reload_never_fires() {
        let start = Instant::now();
        let id = Uuid::from_u128(1);
        let mut schedule = ReloadSchedule::new();
        schedule.schedule(id, start);
        assert!(schedule.cancel(id));
        assert!(!schedule.cancel(id));
        assert!(schedule.take_due(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn retain_drops_rows_that_are_gone() {
        let start = Instant::now();
        let mut schedule = ReloadSchedule::new();
        schedule.schedule(Uuid::from_u128(1), start);
        schedule.schedule(Uuid::from_u128(2), start);
        schedule.retain(|id| id == Uuid::from_u128(2));
        assert!(!schedule.is_scheduled(Uuid::from_u128(1)));
        assert!(schedule.is_scheduled(Uuid::from_u128(2)));
    }
}
