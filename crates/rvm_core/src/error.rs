use std::io;

use thiserror::Error;

/// Every way the interpreter can stop without reaching `halt`.
///
/// `Halt` is deliberately not a variant here: per the instruction set it's
/// the normal termination sentinel, not a failure, so it's folded into
/// [`crate::ExecState`] instead of forcing every caller to match it out of
/// the error path.
#[derive(Error, Debug)]
pub enum VmError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("out of resources: no free array identifier")]
    OutOfResources,

    #[error("invalid opcode {0} at pc={1}")]
    InvalidOpcode(u32, u32),

    #[error("index {index} out of bounds for array {id} (len {len})")]
    OutOfBounds { id: u32, index: u32, len: u32 },

    #[error("unknown array identifier {0}")]
    UnknownId(u32),

    #[error("attempt to free the zero array")]
    FreeZeroArray,

    #[error("division by zero")]
    DivideByZero,
}
