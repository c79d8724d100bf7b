//! Click-driven play session over the pure engine.
//!
//! The engine knows nothing about selection or feedback; this module holds
//! the single current `GameState` reference plus the transient selection,
//! and translates "the user clicked a pole" into engine calls. The
//! [`ClickOutcome`] it returns is the trigger the calling layer uses for
//! success/failure cues; the session itself performs no I/O.

use crate::engine::{optimal_move_count, GameState, Pole};

/// A picked-up disk: the chosen pole and the disk's position in that pole's
/// stack. Only the top disk of a pole is selectable, so `disk_index` is
/// always the top position at selection time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The pole whose top disk is selected.
    pub pole: Pole,
    /// Index of the selected disk within the pole's stack (bottom = 0).
    pub disk_index: usize,
}

/// What a pole click did, for the feedback layer to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The top disk of the clicked pole was picked up.
    Selected,
    /// The clicked pole was already selected; the selection was cleared.
    Deselected,
    /// The selected disk was moved onto the clicked pole.
    Moved,
    /// The move onto the clicked pole was illegal; the selection is kept so
    /// the user can try another destination.
    RejectedMove,
    /// No selection was held and the clicked pole has no disk to pick up.
    EmptyPole,
}

/// An interactive game: the current state, the transient selection, and the
/// statistics the UI presents.
///
/// # Examples
/// ```
/// use hanoi_tower::engine::Pole;
/// use hanoi_tower::session::{ClickOutcome, Session};
///
/// let mut session = Session::new(3);
/// assert_eq!(session.click_pole(Pole::Left), ClickOutcome::Selected);
/// assert_eq!(session.click_pole(Pole::Right), ClickOutcome::Moved);
/// assert_eq!(session.state().moves(), 1);
/// assert!(session.selection().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    selection: Option<Selection>,
}

impl Session {
    /// Starts a fresh game with `disk_count` disks and no selection.
    pub fn new(disk_count: u32) -> Self {
        Session {
            state: GameState::new(disk_count),
            selection: None,
        }
    }

    /// Starts a session from an existing state, e.g. a scrambled position.
    pub fn with_state(state: GameState) -> Self {
        Session {
            state,
            selection: None,
        }
    }

    /// Returns the current puzzle state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current selection, if a disk is picked up.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Discards the current game and starts over with `disk_count` disks.
    ///
    /// Changing the disk count replaces the state wholesale; there is no
    /// in-place resize.
    pub fn initialize(&mut self, disk_count: u32) {
        self.state = GameState::new(disk_count);
        self.selection = None;
    }

    /// Restarts the game with the current disk count.
    pub fn reset(&mut self) {
        let disk_count = self.state.total_disks();
        self.initialize(disk_count);
    }

    /// Handles a pole click and reports what happened.
    ///
    /// With no selection held, clicking a non-empty pole picks up its top
    /// disk; clicking an empty pole does nothing. With a selection held,
    /// clicking the same pole puts the disk back (deselects), clicking
    /// another pole performs the move when legal, and keeps the selection
    /// when the move is illegal so the user can retry. The selection is
    /// always cleared after a successful move.
    pub fn click_pole(&mut self, pole: Pole) -> ClickOutcome {
        match self.selection {
            None => {
                let stack_len = self.state.pole(pole).len();
                if stack_len == 0 {
                    return ClickOutcome::EmptyPole;
                }
                self.selection = Some(Selection {
                    pole,
                    disk_index: stack_len - 1,
                });
                ClickOutcome::Selected
            }
            Some(selection) => {
                if selection.pole == pole {
                    self.selection = None;
                    return ClickOutcome::Deselected;
                }
                if self.state.is_valid_move(selection.pole, pole) {
                    self.state = self.state.apply_move(selection.pole, pole);
                    self.selection = None;
                    ClickOutcome::Moved
                } else {
                    ClickOutcome::RejectedMove
                }
            }
        }
    }

    /// Returns the theoretical minimum move count for this game.
    pub fn optimal_moves(&self) -> u64 {
        optimal_move_count(self.state.total_disks())
    }

    /// Returns the efficiency figure the statistics display shows:
    /// `round(optimal / moves * 100)`, or 100 before the first move.
    pub fn efficiency_percent(&self) -> u32 {
        let moves = self.state.moves();
        if moves == 0 {
            return 100;
        }
        ((self.optimal_moves() as f64 / moves as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_move() {
        let mut session = Session::new(3);
        assert_eq!(session.click_pole(Pole::Left), ClickOutcome::Selected);
        assert_eq!(
            session.selection(),
            Some(Selection {
                pole: Pole::Left,
                disk_index: 2
            })
        );
        assert_eq!(session.click_pole(Pole::Center), ClickOutcome::Moved);
        assert!(session.selection().is_none());
        assert_eq!(session.state().pole(Pole::Center), &[1]);
        assert_eq!(session.state().moves(), 1);
    }

    #[test]
    fn test_reclick_deselects() {
        let mut session = Session::new(3);
        session.click_pole(Pole::Left);
        assert_eq!(session.click_pole(Pole::Left), ClickOutcome::Deselected);
        assert!(session.selection().is_none());
        assert_eq!(session.state().moves(), 0);
    }

    #[test]
    fn test_empty_pole_click_does_nothing() {
        let mut session = Session::new(3);
        assert_eq!(session.click_pole(Pole::Right), ClickOutcome::EmptyPole);
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_rejected_move_keeps_selection() {
        let mut session = Session::new(3);
        // 1 to Right, then pick up 2 and try to drop it on 1.
        session.click_pole(Pole::Left);
        session.click_pole(Pole::Right);
        assert_eq!(session.click_pole(Pole::Left), ClickOutcome::Selected);
        assert_eq!(session.click_pole(Pole::Right), ClickOutcome::RejectedMove);
        assert!(session.selection().is_some(), "selection survives a reject");
        assert_eq!(session.state().moves(), 1);
        // A legal destination still works afterwards.
        assert_eq!(session.click_pole(Pole::Center), ClickOutcome::Moved);
        assert_eq!(session.state().moves(), 2);
    }

    #[test]
    fn test_initialize_and_reset_replace_state() {
        let mut session = Session::new(3);
        session.click_pole(Pole::Left);
        session.click_pole(Pole::Right);
        assert_eq!(session.state().moves(), 1);

        session.reset();
        assert_eq!(session.state().moves(), 0);
        assert_eq!(session.state().total_disks(), 3);
        assert!(session.selection().is_none());

        session.initialize(5);
        assert_eq!(session.state().total_disks(), 5);
        assert_eq!(session.state().pole(Pole::Left), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_initialize_clears_selection() {
        let mut session = Session::new(3);
        session.click_pole(Pole::Left);
        assert!(session.selection().is_some());
        session.initialize(4);
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_efficiency_percent() {
        let mut session = Session::new(3);
        assert_eq!(session.optimal_moves(), 7);
        assert_eq!(session.efficiency_percent(), 100, "no moves yet");

        // Solve optimally: efficiency stays at 100 after 7 moves.
        for (from, to) in [
            (Pole::Left, Pole::Right),
            (Pole::Left, Pole::Center),
            (Pole::Right, Pole::Center),
            (Pole::Left, Pole::Right),
            (Pole::Center, Pole::Left),
            (Pole::Center, Pole::Right),
            (Pole::Left, Pole::Right),
        ] {
            session.click_pole(from);
            session.click_pole(to);
        }
        assert!(session.state().is_complete());
        assert_eq!(session.state().moves(), 7);
        assert_eq!(session.efficiency_percent(), 100);
    }

    #[test]
    fn test_efficiency_percent_degrades() {
        let mut session = Session::new(3);
        // Waste moves shuttling the small disk around.
        for (from, to) in [
            (Pole::Left, Pole::Center),
            (Pole::Center, Pole::Right),
            (Pole::Right, Pole::Left),
            (Pole::Left, Pole::Center),
        ] {
            session.click_pole(from);
            session.click_pole(to);
        }
        assert_eq!(session.state().moves(), 4);
        // The raw optimal/moves ratio exceeds 100% while under the optimum,
        // matching the reference display: round(7 / 4 * 100) = 175.
        assert_eq!(session.efficiency_percent(), 175);

        // Push past the optimum.
        for _ in 0..6 {
            session.click_pole(Pole::Center);
            session.click_pole(Pole::Right);
            session.click_pole(Pole::Right);
            session.click_pole(Pole::Center);
        }
        assert_eq!(session.state().moves(), 16);
        assert_eq!(session.efficiency_percent(), 44); // round(7/16*100)
    }

    #[test]
    fn test_session_from_scrambled_state() {
        let session = Session::with_state(GameState::scrambled(4, 30, 3));
        assert_eq!(session.state().moves(), 30);
        assert!(session.selection().is_none());
    }
}
