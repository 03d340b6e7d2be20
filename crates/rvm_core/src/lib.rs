//! A register machine interpreter: decode/dispatch loop, array allocator,
//! and program loader for a flat, self-modifying 32-bit instruction image.

mod codec;
mod error;
mod interpreter;
mod loader;
mod registers;
mod state;
mod store;

pub use codec::{Instruction, Opcode, RegIdx};
pub use error::VmError;
pub use interpreter::Vm;
pub use loader::load_program;
pub use state::ExecState;
pub use store::ArrayStore;
