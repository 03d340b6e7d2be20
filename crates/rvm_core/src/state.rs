/// Top-level state of a single `step` or `run`.
///
/// `Halted` is the *only* way `run` stops successfully; everything else
/// that can go wrong is reported through [`crate::VmError`] instead, since
/// it isn't a normal outcome of executing a well-formed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Running,
    Halted,
}
