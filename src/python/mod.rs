//! Python bindings for the Nine Square engine.
//!
//! Lets a Python front end (pygame or similar) own the window and input
//! handling while the rules and turn machine run in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import nine_square as ns
//!
//! game = ns.GameEngine()
//! game.click(2, 2)          # select
//! game.click(3, 2)          # step; turn passes to Blue
//! print(game.status)        # "Blue Turn"
//! board = game.board_numpy()  # 8x8 int8: 0 empty, 1 red, 2 blue
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// nine_square: move generation and turn state for Nine Square.
#[pymodule]
fn nine_square(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyPosition>()?;

    // Game
    m.add_class::<PyGameEngine>()?;

    Ok(())
}
