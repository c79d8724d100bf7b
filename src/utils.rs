use crate::engine::GameState;

/// Parses three pole lines into a `GameState`.
///
/// Each line describes one pole (Left, Center, Right in order) as
/// whitespace-separated disk sizes listed bottom-to-top; an empty (or
/// all-whitespace) line is an empty pole. The resulting state has a move
/// counter of 0 and its completion flag computed from the Right pole.
///
/// Validation is delegated to [`GameState::from_poles`], so the usual
/// position invariants apply: disk sizes must be exactly 1..=N with no
/// duplicates, and every pole must be strictly decreasing bottom-to-top.
///
/// # Arguments
/// * `s`: Exactly three string slices, one per pole.
///
/// # Returns
/// * `Ok(GameState)` when the lines describe a legal position.
/// * `Err(String)` when the line count is wrong, a token is not a positive
///   integer, or the position violates an invariant.
///
/// # Examples
/// ```
/// use hanoi_tower::engine::Pole;
/// use hanoi_tower::utils::state_from_str_array;
///
/// let state = state_from_str_array(&["3 2", "", "1"]).unwrap();
/// assert_eq!(state.pole(Pole::Left), &[3, 2]);
/// assert_eq!(state.pole(Pole::Right), &[1]);
/// assert_eq!(state.moves(), 0);
///
/// assert!(state_from_str_array(&["1 2", "", ""]).is_err()); // inverted stack
/// assert!(state_from_str_array(&["x", "", ""]).is_err());
/// ```
pub fn state_from_str_array(s: &[&str]) -> Result<GameState, String> {
    if s.len() != 3 {
        return Err(format!("Expected 3 pole lines, found {}", s.len()));
    }

    let mut poles: [Vec<u32>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (i, line) in s.iter().enumerate() {
        for token in line.split_whitespace() {
            let disk: u32 = token.parse().map_err(|_| {
                format!("Unrecognized disk size '{}' on pole line {}", token, i)
            })?;
            poles[i].push(disk);
        }
    }

    GameState::from_poles(poles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Pole;

    #[test]
    fn test_parse_valid_position() {
        let state = state_from_str_array(&["4 3", "2", "1"]).unwrap();
        assert_eq!(state.pole(Pole::Left), &[4, 3]);
        assert_eq!(state.pole(Pole::Center), &[2]);
        assert_eq!(state.pole(Pole::Right), &[1]);
        assert_eq!(state.total_disks(), 4);
        assert_eq!(state.moves(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_parse_initial_position() {
        let state = state_from_str_array(&["3 2 1", "", ""]).unwrap();
        assert_eq!(state, GameState::from_poles([vec![3, 2, 1], vec![], vec![]]).unwrap());
    }

    #[test]
    fn test_parse_completed_position() {
        let state = state_from_str_array(&["", "", "3 2 1"]).unwrap();
        assert!(state.is_complete());
    }

    #[test]
    fn test_parse_whitespace_only_pole_is_empty() {
        let state = state_from_str_array(&["2 1", "   ", ""]).unwrap();
        assert!(state.pole(Pole::Center).is_empty());
    }

    #[test]
    fn test_parse_wrong_line_count() {
        let result = state_from_str_array(&["1", ""]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 3 pole lines"));
    }

    #[test]
    fn test_parse_bad_token() {
        let result = state_from_str_array(&["3 two 1", "", ""]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized disk size 'two'"));
    }

    #[test]
    fn test_parse_negative_token() {
        assert!(state_from_str_array(&["-1", "", ""]).is_err());
    }

    #[test]
    fn test_parse_duplicate_disk() {
        let result = state_from_str_array(&["2 1", "1", ""]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_parse_missing_disk() {
        // Disks {1, 3} without 2 are not a legal 2-disk or 3-disk position.
        assert!(state_from_str_array(&["3", "", "1"]).is_err());
    }

    #[test]
    fn test_parse_inverted_stack() {
        let result = state_from_str_array(&["1 2", "", ""]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not strictly decreasing"));
    }
}
