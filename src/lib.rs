//!
//! ## Design
//!
//! * the interpreter core is a deterministic state machine; one call to
//!   `step()` runs exactly one fetch/decode/execute cycle and ticks the
//!   timers, so the host decides cadence
//! * presentation, input and audio are collaborators behind traits; the
//!   core only exposes its framebuffer, redraw flag and keypad surface
//! * the key-wait instruction suspends instead of spinning: PC stays put
//!   and the instruction re-runs each cycle until a fresh keypress, so the
//!   host loop keeps polling input and drawing
//! * ROM loading always resets the machine first, so reloads can never
//!   inherit stale registers, timers or framebuffer contents
//! * malformed programs fail loudly: unknown opcodes and call-stack
//!   faults are fatal errors, never silent corruption
//!
//! Model
//!
//! Host (main)
//!  |-- display, input, sound
//!  |-- interpreter
//!  |    |-- machine state (RAM, registers, timers, stack, framebuffer,
//!  |    |                  keypad, redraw flag)
//!  |    `-- instruction engine
//!  `-- main loop
//!       |-- feed keypad from input
//!       |-- interpreter.step()
//!       |-- start/stop the tone from the sound timer
//!       |-- draw the framebuffer when the redraw flag is up
//!       `-- sleep to the configured cycle rate
pub mod display;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod machine;
pub mod sound;

pub use error::{Chip8Error, Result};
pub use interpreter::{Chip8Interpreter, CycleOutcome};
pub use machine::Chip8Machine;
