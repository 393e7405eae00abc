// SPDX-License-Identifier: MPL-2.0
//! Gesture history for diagnostics.
//!
//! Every event the session handles is recorded with a sequence number and
//! its outcome. Only the newest `capacity` records are retained.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::viewer::arbiter::{Effect, GestureEvent};

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Effect),
    Rejected(Error),
}

/// One handled event.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecord {
    /// Monotonic position of the event in the session (starts at 0).
    pub sequence: u64,
    pub event: GestureEvent,
    pub outcome: Outcome,
}

impl GestureRecord {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected(_))
    }
}

/// Bounded log of handled events, oldest first.
#[derive(Debug, Clone)]
pub struct GestureHistory {
    records: VecDeque<GestureRecord>,
    capacity: usize,
    next_sequence: u64,
}

impl GestureHistory {
    /// Creates a history retaining at most `capacity` records (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Appends the outcome of one handled event.
    pub fn record(&mut self, event: GestureEvent, result: &Result<Effect>) {
        let outcome = match result {
            Ok(effect) => Outcome::Applied(*effect),
            Err(err) => Outcome::Rejected(err.clone()),
        };
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(GestureRecord {
            sequence: self.next_sequence,
            event,
            outcome,
        });
        self.next_sequence += 1;
    }

    /// Iterates retained records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GestureRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GestureRecord> {
        self.records.back()
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of events recorded, including evicted ones.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    /// Number of retained records whose event was rejected.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_rejected()).count()
    }

    /// Number of retained records whose rule corrected a live value.
    #[must_use]
    pub fn normalization_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| {
                matches!(
                    record.outcome,
                    Outcome::Applied(Effect::Viewport(transition)) if transition.is_normalization()
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::PageId;
    use crate::viewer::transform::Transition;

    #[test]
    fn records_carry_increasing_sequence_numbers() {
        let mut history = GestureHistory::new(8);
        history.record(
            GestureEvent::DoubleTap,
            &Ok(Effect::Viewport(Transition::DoubleTapZoomIn)),
        );
        history.record(
            GestureEvent::DrawerToggle,
            &Ok(Effect::Drawer { is_open: true }),
        );

        let sequences: Vec<_> = history.iter().map(|record| record.sequence).collect();
        assert_eq!(sequences, vec![0, 1]);
        assert_eq!(history.last().map(|record| record.event), Some(GestureEvent::DrawerToggle));
    }

    #[test]
    fn eviction_keeps_total_count() {
        let mut history = GestureHistory::new(2);
        for _ in 0..5 {
            history.record(
                GestureEvent::PinchEnded,
                &Ok(Effect::Viewport(Transition::PinchClampedToMax)),
            );
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.total_recorded(), 5);
        assert_eq!(history.iter().next().map(|record| record.sequence), Some(3));
        assert_eq!(history.normalization_count(), 2);
    }

    #[test]
    fn rejections_are_counted() {
        let mut history = GestureHistory::new(4);
        history.record(
            GestureEvent::DragEnded,
            &Ok(Effect::Viewport(Transition::DragCommitted)),
        );
        history.record(
            GestureEvent::ThumbnailSelected(PageId::new(99)),
            &Err(Error::InvalidPage { id: 99 }),
        );

        assert_eq!(history.rejected_count(), 1);
        assert_eq!(history.normalization_count(), 0);
        assert!(history.last().is_some_and(GestureRecord::is_rejected));
    }

    #[test]
    fn zero_capacity_keeps_latest_record() {
        let mut history = GestureHistory::new(0);
        assert_eq!(history.capacity(), 1);

        history.record(
            GestureEvent::DoubleTap,
            &Ok(Effect::Viewport(Transition::DoubleTapZoomIn)),
        );
        history.record(
            GestureEvent::InfoPanelToggle,
            &Ok(Effect::InfoPanel { is_visible: true }),
        );

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.last().map(|record| record.event),
            Some(GestureEvent::InfoPanelToggle)
        );
    }
}
