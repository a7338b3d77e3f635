//! Interaction Session State Machine
//!
//! At most one modal/editing context is active at a time. The active
//! context is a tagged union rather than independent boolean flags, so
//! layered or contradictory modal states are unrepresentable.

use reactive_stores::Store;

use crate::models::{Componente, EditBuffer};

/// Which modal (if any) is currently open
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Closed,
    /// Add form open, draft in the edit buffer
    Adding,
    /// Edit form open for the given item
    Editing(Componente),
    /// Per-item action sheet (compact/mobile presentation)
    ChoosingActions(Componente),
    /// CSV import dialog open
    Importing,
}

/// Active session plus the form draft bound to it
///
/// Derives `Store` so the draft gets its own reactive subfield: keystroke
/// edits notify only `buffer` readers, not the modal selector watching
/// `state`.
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct Session {
    pub state: SessionState,
    pub buffer: EditBuffer,
}

impl Session {
    /// Open the add form. Replaces any other open session; the draft
    /// starts empty.
    pub fn open_adding(&mut self) {
        self.buffer.clear();
        self.state = SessionState::Adding;
    }

    /// Open the edit form for `item`, pre-filling the draft from it.
    pub fn open_editing(&mut self, item: Componente) {
        self.buffer = EditBuffer::from_item(&item);
        self.state = SessionState::Editing(item);
    }

    /// Open the action sheet for `item`.
    pub fn open_actions(&mut self, item: Componente) {
        self.state = SessionState::ChoosingActions(item);
    }

    /// Open the CSV import dialog. The file selection lives inside the
    /// import modal and is dropped with it, so a reopened dialog always
    /// starts without a file.
    pub fn open_importing(&mut self) {
        self.state = SessionState::Importing;
    }

    /// Dismiss whatever is open and clear the draft.
    pub fn close(&mut self) {
        self.state = SessionState::Closed;
        self.buffer.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Id of the item under edit, if an edit session is active.
    pub fn editing_id(&self) -> Option<u32> {
        match &self.state {
            SessionState::Editing(item) => Some(item.id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, nome: &str, quantidade: u32) -> Componente {
        Componente {
            id,
            componente: nome.to_string(),
            quantidade,
            data_cadastro: "2024-03-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_starts_closed() {
        let session = Session::default();
        assert!(session.is_closed());
        assert_eq!(session.buffer, EditBuffer::default());
    }

    #[test]
    fn test_adding_resets_buffer() {
        let mut session = Session::default();
        session.buffer.componente = "leftover".to_string();
        session.open_adding();
        assert_eq!(session.state, SessionState::Adding);
        assert!(session.buffer.componente.is_empty());
        assert!(session.buffer.quantidade.is_empty());
    }

    #[test]
    fn test_editing_loads_buffer_from_item() {
        let mut session = Session::default();
        session.open_editing(item(3, "Arduino Uno", 15));
        assert_eq!(session.editing_id(), Some(3));
        assert_eq!(session.buffer.componente, "Arduino Uno");
        assert_eq!(session.buffer.quantidade, "15");
    }

    #[test]
    fn test_opening_a_session_closes_the_previous_one() {
        let mut session = Session::default();
        session.open_editing(item(3, "Arduino Uno", 15));
        session.open_importing();
        // Only one state is active; the edit context is gone.
        assert_eq!(session.state, SessionState::Importing);
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn test_actions_records_selected_item() {
        let mut session = Session::default();
        session.open_actions(item(9, "Sensor Ultrassônico", 2));
        match &session.state {
            SessionState::ChoosingActions(selected) => assert_eq!(selected.id, 9),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_actions_to_editing_transition() {
        let mut session = Session::default();
        let selected = item(9, "Sensor Ultrassônico", 2);
        session.open_actions(selected.clone());
        session.open_editing(selected);
        assert_eq!(session.editing_id(), Some(9));
    }

    #[test]
    fn test_close_clears_buffer() {
        let mut session = Session::default();
        session.open_editing(item(3, "Arduino Uno", 15));
        session.close();
        assert!(session.is_closed());
        assert!(session.buffer.componente.is_empty());
    }
}
