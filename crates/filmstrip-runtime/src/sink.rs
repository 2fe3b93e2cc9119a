#![forbid(unsafe_code)]

//! Outbound notifications to the host application's state store.
//!
//! The filmstrip never mutates application state directly. Everything it
//! wants the host to know goes through [`FilmstripSink`]: whether a resize
//! is in progress, each committed panel dimension, and which slice of the
//! participant list is on screen.

use std::cell::RefCell;
use std::rc::Rc;

use filmstrip_core::ResizeAxis;
use filmstrip_layout::ParticipantRange;
use serde::Serialize;

/// Receiver for filmstrip state changes.
pub trait FilmstripSink {
    /// A resize drag started (`true`) or stopped (`false`).
    fn resizing_changed(&mut self, resizing: bool);

    /// The user dragged the panel to a new size.
    fn dimension_committed(&mut self, axis: ResizeAxis, dimension: u32);

    /// The virtualized view now shows `range` of the remote participants.
    fn visible_participants_changed(&mut self, range: ParticipantRange);
}

/// A recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilmstripNotification {
    Resizing { resizing: bool },
    Dimension { axis: ResizeAxis, dimension: u32 },
    VisibleParticipants { start: usize, stop: usize },
}

impl FilmstripSink for Vec<FilmstripNotification> {
    fn resizing_changed(&mut self, resizing: bool) {
        self.push(FilmstripNotification::Resizing { resizing });
    }

    fn dimension_committed(&mut self, axis: ResizeAxis, dimension: u32) {
        self.push(FilmstripNotification::Dimension { axis, dimension });
    }

    fn visible_participants_changed(&mut self, range: ParticipantRange) {
        self.push(FilmstripNotification::VisibleParticipants {
            start: range.start,
            stop: range.stop,
        });
    }
}

impl<S: FilmstripSink + ?Sized> FilmstripSink for Rc<RefCell<S>> {
    fn resizing_changed(&mut self, resizing: bool) {
        self.borrow_mut().resizing_changed(resizing);
    }

    fn dimension_committed(&mut self, axis: ResizeAxis, dimension: u32) {
        self.borrow_mut().dimension_committed(axis, dimension);
    }

    fn visible_participants_changed(&mut self, range: ParticipantRange) {
        self.borrow_mut().visible_participants_changed(range);
    }
}

impl<S: FilmstripSink + ?Sized> FilmstripSink for &mut S {
    fn resizing_changed(&mut self, resizing: bool) {
        (**self).resizing_changed(resizing);
    }

    fn dimension_committed(&mut self, axis: ResizeAxis, dimension: u32) {
        (**self).dimension_committed(axis, dimension);
    }

    fn visible_participants_changed(&mut self, range: ParticipantRange) {
        (**self).visible_participants_changed(range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_records_in_order() {
        let mut log: Vec<FilmstripNotification> = Vec::new();
        log.resizing_changed(true);
        log.dimension_committed(ResizeAxis::Horizontal, 320);
        log.visible_participants_changed(ParticipantRange::new(2, 5));
        assert_eq!(
            log,
            vec![
                FilmstripNotification::Resizing { resizing: true },
                FilmstripNotification::Dimension {
                    axis: ResizeAxis::Horizontal,
                    dimension: 320
                },
                FilmstripNotification::VisibleParticipants { start: 2, stop: 5 },
            ]
        );
    }

    #[test]
    fn shared_sink_forwards() {
        let shared = Rc::new(RefCell::new(Vec::<FilmstripNotification>::new()));
        let mut handle = Rc::clone(&shared);
        handle.resizing_changed(false);
        assert_eq!(shared.borrow().len(), 1);
    }
}
