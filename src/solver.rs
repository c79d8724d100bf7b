use crate::engine::{GameState, Pole};

/// An optimal solution produced by [`solve`].
#[derive(Clone, Debug)]
pub struct Solution {
    /// Sequence of (from, to) pole moves, in play order.
    pub moves: Vec<(Pole, Pole)>,
    /// The number of moves in the sequence, always `2^n - 1`.
    pub move_count: u64,
    /// The state after replaying the sequence; complete by construction.
    pub final_state: GameState,
}

/// Returns the optimal move sequence carrying `disk_count` disks from
/// `from` to `to`, using `via` as the spare pole.
///
/// This is the classic recursive decomposition: move the top `n - 1` disks
/// out of the way, move the largest disk, then stack the `n - 1` back on
/// top of it. The sequence has exactly `2^n - 1` entries.
///
/// # Examples
/// ```
/// use hanoi_tower::engine::Pole;
/// use hanoi_tower::solver::optimal_sequence;
///
/// let moves = optimal_sequence(2, Pole::Left, Pole::Center, Pole::Right);
/// assert_eq!(
///     moves,
///     vec![
///         (Pole::Left, Pole::Center),
///         (Pole::Left, Pole::Right),
///         (Pole::Center, Pole::Right),
///     ]
/// );
/// ```
pub fn optimal_sequence(disk_count: u32, from: Pole, via: Pole, to: Pole) -> Vec<(Pole, Pole)> {
    let mut moves = Vec::new();
    push_sequence(disk_count, from, via, to, &mut moves);
    moves
}

fn push_sequence(n: u32, from: Pole, via: Pole, to: Pole, out: &mut Vec<(Pole, Pole)>) {
    if n == 0 {
        return;
    }
    push_sequence(n - 1, from, to, via, out);
    out.push((from, to));
    push_sequence(n - 1, via, from, to, out);
}

/// Solves the standard `disk_count`-disk puzzle (Left to Right).
///
/// The generated sequence is replayed through the engine move by move; every
/// move is asserted to validate, so the returned `final_state` is the
/// engine's own account of the solution, not a separately computed one.
pub fn solve(disk_count: u32) -> Solution {
    let moves = optimal_sequence(disk_count, Pole::Left, Pole::Center, Pole::Right);

    let mut state = GameState::new(disk_count);
    for &(from, to) in &moves {
        assert!(state.is_valid_move(from, to));
        state = state.apply_move(from, to);
    }

    Solution {
        move_count: moves.len() as u64,
        moves,
        final_state: state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{check_win_condition, optimal_move_count};

    #[test]
    fn test_solve_zero_disks() {
        let solution = solve(0);
        assert!(solution.moves.is_empty());
        assert_eq!(solution.move_count, 0);
        assert_eq!(solution.final_state.moves(), 0);
    }

    #[test]
    fn test_solve_one_disk() {
        let solution = solve(1);
        assert_eq!(solution.moves, vec![(Pole::Left, Pole::Right)]);
        assert!(solution.final_state.is_complete());
    }

    #[test]
    fn test_solve_three_disks_matches_canonical_sequence() {
        let solution = solve(3);
        assert_eq!(
            solution.moves,
            vec![
                (Pole::Left, Pole::Right),
                (Pole::Left, Pole::Center),
                (Pole::Right, Pole::Center),
                (Pole::Left, Pole::Right),
                (Pole::Center, Pole::Left),
                (Pole::Center, Pole::Right),
                (Pole::Left, Pole::Right),
            ]
        );
        assert_eq!(solution.move_count, 7);
        assert_eq!(solution.final_state.pole(Pole::Right), &[3, 2, 1]);
        assert!(solution.final_state.is_complete());
    }

    #[test]
    fn test_solve_is_optimal_for_small_sizes() {
        for n in 1..=8u32 {
            let solution = solve(n);
            assert_eq!(solution.move_count, optimal_move_count(n), "n = {}", n);
            assert_eq!(solution.final_state.moves() as u64, solution.move_count);
            assert!(solution.final_state.is_complete(), "n = {} not solved", n);
            assert!(check_win_condition(&solution.final_state, n));
        }
    }

    #[test]
    fn test_optimal_sequence_respects_endpoints() {
        // Solving toward Center leaves the tower there, not on Right.
        let moves = optimal_sequence(3, Pole::Left, Pole::Right, Pole::Center);
        let mut state = GameState::new(3);
        for (from, to) in moves {
            state = state.apply_move(from, to);
        }
        assert_eq!(state.pole(Pole::Center), &[3, 2, 1]);
        assert!(!state.is_complete(), "Center is not the target pole");
    }
}
