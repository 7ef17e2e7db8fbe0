//! Grid snake with special food effects.
//!
//! `game` drives the simulation over `grid`, `body`, `food`, `placement` and `random`;
//! `renderer`, `ui` and `terminal_runtime` draw it in a terminal. The core borrows
//! `Direction` from `input` and `GridSize` from `config`, so it is not free of the
//! crossterm and ratatui dependencies.

pub mod body;
pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod placement;
pub mod random;
pub mod renderer;
pub mod terminal_runtime;
pub mod ui;
