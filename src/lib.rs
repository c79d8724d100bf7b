//! # Tower of Hanoi Library
//!
//! This library provides the core game logic for the Tower of Hanoi puzzle:
//! a pure, immutable-per-move state machine over three disk stacks, plus a
//! recursive solver producing the optimal move sequence.
//!
//! It is used by two binaries:
//! - `human_player`: Interactive gameplay in the terminal, using the same
//!   click-a-pole protocol a pointer UI would drive.
//! - `auto_solver`: Prints the optimal `2^n - 1` move solution and replays
//!   it through the engine.
//!
//! ## Modules
//! - `engine`: The puzzle state (`GameState`), pole identifiers (`Pole`),
//!   move validation and application, derived statistics, and terminal
//!   rendering.
//! - `session`: The selection/click layer a UI drives (`Session`,
//!   `ClickOutcome`), kept outside the pure core.
//! - `solver`: The `solve` function and the recursive `optimal_sequence`.
//! - `utils`: Parsing puzzle positions from text, mainly for tests.

pub mod engine;
pub mod session;
pub mod solver;
pub mod utils;

// Items from sub-modules are accessed via their full path, e.g.
// `hanoi_tower::engine::GameState`. This keeps the top-level library
// namespace cleaner.
