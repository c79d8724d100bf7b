//! Core game engine for the Tower of Hanoi puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Pole`: Identifies one of the three disk stacks (Left, Center, Right).
//! - `GameState`: An immutable-per-move snapshot of the three poles, the move
//!   counter, and the completion flag, together with the move-validation and
//!   move-application logic.
//!
//! Every transition is "old state in, new state out": `apply_move` never
//! mutates its receiver, so the calling layer replaces its held `GameState`
//! after each successful move.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Identifies one of the three poles of the puzzle.
///
/// Using an enumerated identifier instead of a raw integer removes
/// out-of-range pole indices by construction: there is no fourth pole to
/// name. Raw indices coming from an input layer go through
/// [`Pole::from_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pole {
    /// The leftmost pole (index 0). All disks start here.
    Left,
    /// The middle pole (index 1).
    Center,
    /// The rightmost pole (index 2). The puzzle is complete when every disk
    /// rests here.
    Right,
}

impl Pole {
    /// All three poles in index order. Handy for iteration.
    pub const ALL: [Pole; 3] = [Pole::Left, Pole::Center, Pole::Right];

    /// Returns the conventional index of this pole (0, 1 or 2).
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::Pole;
    /// assert_eq!(Pole::Left.index(), 0);
    /// assert_eq!(Pole::Right.index(), 2);
    /// ```
    pub fn index(self) -> usize {
        match self {
            Pole::Left => 0,
            Pole::Center => 1,
            Pole::Right => 2,
        }
    }

    /// Converts a raw index into a `Pole`.
    ///
    /// # Returns
    /// `Some(pole)` for indices 0, 1 and 2, `None` otherwise.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::Pole;
    /// assert_eq!(Pole::from_index(1), Some(Pole::Center));
    /// assert_eq!(Pole::from_index(3), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Pole> {
        match index {
            0 => Some(Pole::Left),
            1 => Some(Pole::Center),
            2 => Some(Pole::Right),
            _ => None,
        }
    }

    /// Returns the display label of this pole.
    pub fn label(self) -> &'static str {
        match self {
            Pole::Left => "Left",
            Pole::Center => "Center",
            Pole::Right => "Right",
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the minimum number of moves needed to solve an `n`-disk puzzle.
///
/// This is the classic closed form for the 3-peg Tower of Hanoi,
/// `2^n - 1`. The function is total: it returns 0 for `disk_count == 0`
/// and saturates at the integer range for enormous inputs instead of
/// overflowing.
///
/// # Examples
/// ```
/// use hanoi_tower::engine::optimal_move_count;
/// assert_eq!(optimal_move_count(0), 0);
/// assert_eq!(optimal_move_count(3), 7);
/// assert_eq!(optimal_move_count(8), 255);
/// ```
pub fn optimal_move_count(disk_count: u32) -> u64 {
    2u64.saturating_pow(disk_count) - 1
}

/// Returns `true` iff the Right pole holds exactly `total_disks` disks.
///
/// Because every disk lives on exactly one pole, this is equivalent to
/// "all disks are on the Right pole". The same condition is maintained
/// incrementally as [`GameState::is_complete`]; this free function is the
/// independently callable form, useful for test assertions.
pub fn check_win_condition(state: &GameState, total_disks: u32) -> bool {
    state.pole(Pole::Right).len() as u32 == total_disks
}

/// A snapshot of a Tower of Hanoi puzzle.
///
/// Holds the three disk stacks, the number of moves made so far, and the
/// completion flag. Disks are positive integers 1..=N where N is the
/// configured disk count; a larger number is a larger disk. Within each pole
/// the stack is strictly decreasing from bottom to top, and across the three
/// poles every disk appears exactly once. Both invariants hold for every
/// state reachable through [`GameState::apply_move`].
///
/// # Examples
/// ```
/// use hanoi_tower::engine::{GameState, Pole};
///
/// let state = GameState::new(3);
/// assert_eq!(state.pole(Pole::Left), &[3, 2, 1]);
/// assert_eq!(state.moves(), 0);
/// assert!(!state.is_complete());
///
/// // Transitions return a new value; `state` is untouched.
/// let next = state.apply_move(Pole::Left, Pole::Right);
/// assert_eq!(next.pole(Pole::Right), &[1]);
/// assert_eq!(state.pole(Pole::Left), &[3, 2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    poles: [Vec<u32>; 3],
    moves: u32,
    complete: bool,
    total_disks: u32,
}

impl GameState {
    /// Creates the initial state of a `disk_count`-disk puzzle.
    ///
    /// The Left pole holds `[disk_count, disk_count - 1, ..., 1]` (largest at
    /// the bottom), the other poles are empty, the move counter is 0 and the
    /// completion flag is false. The core places no upper bound on
    /// `disk_count`; the playable range is the calling layer's concern.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::{GameState, Pole};
    /// let state = GameState::new(4);
    /// assert_eq!(state.pole(Pole::Left), &[4, 3, 2, 1]);
    /// assert!(state.pole(Pole::Center).is_empty());
    /// assert!(state.pole(Pole::Right).is_empty());
    /// ```
    pub fn new(disk_count: u32) -> Self {
        let left: Vec<u32> = (1..=disk_count).rev().collect();
        GameState {
            poles: [left, Vec::new(), Vec::new()],
            moves: 0,
            complete: false,
            total_disks: disk_count,
        }
    }

    /// Builds a state from three explicit pole stacks, listed bottom-to-top.
    ///
    /// The disk count is inferred from the number of disks present. The move
    /// counter starts at 0 and the completion flag is computed from the
    /// Right pole.
    ///
    /// # Returns
    /// * `Ok(GameState)` when the stacks form a legal position.
    /// * `Err(String)` when a disk size is zero, a disk is missing or
    ///   duplicated (the disks must be exactly 1..=N), or a stack is not
    ///   strictly decreasing from bottom to top.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::{GameState, Pole};
    ///
    /// let state = GameState::from_poles([vec![3, 2], vec![], vec![1]]).unwrap();
    /// assert_eq!(state.total_disks(), 3);
    /// assert_eq!(state.top_disk(Pole::Right), Some(1));
    ///
    /// assert!(GameState::from_poles([vec![1, 2], vec![], vec![]]).is_err());
    /// assert!(GameState::from_poles([vec![1], vec![1], vec![]]).is_err());
    /// ```
    pub fn from_poles(poles: [Vec<u32>; 3]) -> Result<GameState, String> {
        let total: usize = poles.iter().map(Vec::len).sum();
        let total_disks = total as u32;

        // Conservation: the disks across all poles must be exactly 1..=N.
        let mut seen = vec![false; total];
        for pole in &poles {
            for &disk in pole {
                if disk == 0 {
                    return Err("Disk sizes must be positive".to_string());
                }
                if disk > total_disks {
                    return Err(format!(
                        "Disk {} is out of range for a {}-disk puzzle",
                        disk, total_disks
                    ));
                }
                if seen[(disk - 1) as usize] {
                    return Err(format!("Disk {} appears more than once", disk));
                }
                seen[(disk - 1) as usize] = true;
            }
        }

        // Strict ordering: larger disks below smaller ones on every pole.
        for (i, pole) in poles.iter().enumerate() {
            for pair in pole.windows(2) {
                if pair[1] >= pair[0] {
                    return Err(format!(
                        "Pole {} is not strictly decreasing: disk {} rests on disk {}",
                        i, pair[1], pair[0]
                    ));
                }
            }
        }

        let complete = total_disks > 0 && poles[Pole::Right.index()].len() as u32 == total_disks;
        Ok(GameState {
            poles,
            moves: 0,
            complete,
            total_disks,
        })
    }

    /// Returns the disks on `pole`, listed bottom-to-top.
    pub fn pole(&self, pole: Pole) -> &[u32] {
        &self.poles[pole.index()]
    }

    /// Returns the topmost (only movable) disk of `pole`, or `None` when the
    /// pole is empty.
    pub fn top_disk(&self, pole: Pole) -> Option<u32> {
        self.poles[pole.index()].last().copied()
    }

    /// Returns the number of successful moves made so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns `true` once every disk rests on the Right pole.
    ///
    /// The flag is recomputed after every move, so moving a disk off the
    /// Right pole after winning flips it back to `false`. The engine does not
    /// lock a finished puzzle.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the configured disk count of this game.
    pub fn total_disks(&self) -> u32 {
        self.total_disks
    }

    /// Checks whether moving the top disk of `from` onto `to` is legal.
    ///
    /// Returns `false` (not an error) when `from == to` or `from` is empty.
    /// Otherwise the move is legal iff the moving disk is strictly smaller
    /// than the top disk of `to`; an empty destination accepts any disk.
    ///
    /// Pure and side-effect free, so it is safe to call speculatively, e.g.
    /// for hover previews.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::{GameState, Pole};
    /// let state = GameState::new(3);
    /// assert!(state.is_valid_move(Pole::Left, Pole::Right));
    /// assert!(!state.is_valid_move(Pole::Left, Pole::Left));
    /// assert!(!state.is_valid_move(Pole::Center, Pole::Right)); // empty source
    /// ```
    pub fn is_valid_move(&self, from: Pole, to: Pole) -> bool {
        if from == to {
            return false;
        }
        let from_disk = match self.top_disk(from) {
            Some(disk) => disk,
            None => return false,
        };
        match self.top_disk(to) {
            Some(to_disk) => from_disk < to_disk,
            None => true,
        }
    }

    /// Applies a move and returns the resulting state.
    ///
    /// When the move is invalid per [`is_valid_move`](Self::is_valid_move)
    /// this is a silent no-op returning a copy of the input state: invalid
    /// requests are ignored at the engine level, and any user feedback is
    /// the calling layer's job. Otherwise the top disk of `from` is relocated
    /// onto `to`, the move counter grows by exactly one, and the completion
    /// flag is recomputed.
    ///
    /// The receiver is never modified.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::{GameState, Pole};
    ///
    /// let state = GameState::new(3);
    /// let next = state.apply_move(Pole::Left, Pole::Right);
    /// assert_eq!(next.pole(Pole::Left), &[3, 2]);
    /// assert_eq!(next.pole(Pole::Right), &[1]);
    /// assert_eq!(next.moves(), 1);
    ///
    /// // Invalid move: identity.
    /// let same = next.apply_move(Pole::Left, Pole::Right); // 2 onto 1
    /// assert_eq!(same, next);
    /// ```
    pub fn apply_move(&self, from: Pole, to: Pole) -> GameState {
        if !self.is_valid_move(from, to) {
            return self.clone();
        }

        let mut next = self.clone();
        let disk = next.poles[from.index()]
            .pop()
            .expect("source pole is non-empty after validation");
        next.poles[to.index()].push(disk);
        next.moves += 1;
        next.complete = next.poles[Pole::Right.index()].len() as u32 == next.total_disks;
        next
    }

    /// Creates a reachable mid-game position by random play.
    ///
    /// Starting from `GameState::new(disk_count)`, applies up to `steps`
    /// moves chosen uniformly among the currently legal ones, using a
    /// `SmallRng` seeded with `seed` so the result is deterministic per seed.
    /// The returned state's move counter reflects the moves taken.
    ///
    /// Because only legal moves are applied, every scrambled state satisfies
    /// the stack-ordering and conservation invariants.
    ///
    /// # Examples
    /// ```
    /// use hanoi_tower::engine::GameState;
    /// let a = GameState::scrambled(5, 40, 7);
    /// let b = GameState::scrambled(5, 40, 7);
    /// assert_eq!(a, b, "scrambling is deterministic per seed");
    /// ```
    pub fn scrambled(disk_count: u32, steps: u32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = GameState::new(disk_count);

        for _ in 0..steps {
            let legal: Vec<(Pole, Pole)> = Pole::ALL
                .into_iter()
                .flat_map(|from| Pole::ALL.into_iter().map(move |to| (from, to)))
                .filter(|&(from, to)| state.is_valid_move(from, to))
                .collect();
            if legal.is_empty() {
                // Only possible with zero disks.
                break;
            }
            let (from, to) = legal[rng.gen_range(0..legal.len())];
            state = state.apply_move(from, to);
        }
        state
    }

    /// Generates a terminal rendering of the towers with an optional
    /// selection highlight.
    ///
    /// Disks are drawn as ANSI-colored blocks whose width grows with the
    /// disk size and whose color is derived from it; the bare pole rod shows
    /// where no disk sits. When `selected` names a pole, the top disk of that
    /// pole is drawn highlighted, mirroring a picked-up disk.
    ///
    /// # Arguments
    /// * `selected`: The pole whose top disk should be highlighted, if any.
    ///
    /// # Returns
    /// A `String` suitable for terminal output, ending with the pole labels.
    pub fn to_string_with_selection(&self, selected: Option<Pole>) -> String {
        let n = self.total_disks.max(1) as usize;
        let cell_width = 2 * n - 1;
        let mut output = String::new();

        // One rod row above the tallest possible stack keeps the poles
        // visible even when a pole is full.
        for level in (0..=n).rev() {
            for (i, pole) in Pole::ALL.iter().enumerate() {
                if i > 0 {
                    output.push_str("  ");
                }
                let stack = self.pole(*pole);
                match stack.get(level) {
                    Some(&disk) => {
                        let width = 2 * disk as usize - 1;
                        let pad = (cell_width - width) / 2;
                        let is_selected = selected == Some(*pole) && level + 1 == stack.len();
                        let color = if is_selected {
                            "103" // bright yellow, the picked-up disk
                        } else {
                            disk_color_code(disk)
                        };
                        let body = format!("{:^width$}", disk, width = width);
                        output.push_str(&" ".repeat(pad));
                        output.push_str(&format!("\x1b[1;30;{}m{}\x1b[m", color, body));
                        output.push_str(&" ".repeat(pad));
                    }
                    None => {
                        output.push_str(&format!("{:^width$}", "|", width = cell_width));
                    }
                }
            }
            output.push('\n');
        }

        // Base and labels.
        output.push_str(&"-".repeat(3 * cell_width + 4));
        output.push('\n');
        for (i, pole) in Pole::ALL.iter().enumerate() {
            if i > 0 {
                output.push_str("  ");
            }
            output.push_str(&format!("{:^width$}", pole.label(), width = cell_width));
        }
        output
    }
}

/// Returns the ANSI background color code for a disk of the given size.
///
/// Sizes cycle through six distinct colors, the terminal analog of the
/// original per-size hue ramp.
fn disk_color_code(disk: u32) -> &'static str {
    match (disk - 1) % 6 {
        0 => "41", // red
        1 => "42", // green
        2 => "44", // blue
        3 => "45", // magenta
        4 => "46", // cyan
        5 => "47", // white
        _ => unreachable!("modulo 6 is always in 0..6"),
    }
}

impl fmt::Display for GameState {
    /// Formats the state for display using `to_string_with_selection(None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_selection(None))
    }
}
