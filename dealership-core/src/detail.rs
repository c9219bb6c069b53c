//! Detail view open/close state machine
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetailState {
    #[default]
    Closed,
    /// Showing the record with this catalog id
    Open(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// A card was activated
    Select(u32),
    CloseButton,
    /// Click outside the dialog content
    Backdrop,
    Escape,
    /// Closed because the visitor moved on to the purchase or contact form
    Handoff,
}

impl DetailState {
    /// Next state after `event`. Selecting while open swaps the record.
    #[must_use]
    pub const fn apply(self, event: DetailEvent) -> Self {
        match (self, event) {
            (_, DetailEvent::Select(id)) => Self::Open(id),
            (
                _,
                DetailEvent::CloseButton
                | DetailEvent::Backdrop
                | DetailEvent::Escape
                | DetailEvent::Handoff,
            ) => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn open_id(self) -> Option<u32> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_opens_and_close_events_close() {
        for close in [
            DetailEvent::CloseButton,
            DetailEvent::Backdrop,
            DetailEvent::Escape,
            DetailEvent::Handoff,
        ] {
            let open = DetailState::Closed.apply(DetailEvent::Select(3));
            assert_eq!(open, DetailState::Open(3));
            assert_eq!(open.apply(close), DetailState::Closed);
        }
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        assert_eq!(
            DetailState::Closed.apply(DetailEvent::Escape),
            DetailState::Closed
        );
    }

    #[test]
    fn selecting_another_card_replaces_record() {
        let state = DetailState::Open(1).apply(DetailEvent::Select(5));
        assert_eq!(state.open_id(), Some(5));
        assert!(state.is_open());
    }
}
