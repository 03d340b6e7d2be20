//! The fetch/decode/dispatch loop.

use std::io::{Read, Write};

use log::trace;

use crate::codec::{Instruction, Opcode, RegIdx};
use crate::error::VmError;
use crate::registers::RegisterFile;
use crate::state::ExecState;
use crate::store::ArrayStore;

/// A running instance of the machine: register file, program counter,
/// array store, and the byte streams ops 10/11 read and write.
///
/// Input and output are injected rather than hard-wired to stdio, so the
/// interpreter can be driven directly by tests without a real process.
pub struct Vm<'io> {
    registers: RegisterFile,
    pc: u32,
    store: ArrayStore,
    input: Box<dyn Read + 'io>,
    output: Box<dyn Write + 'io>,
}

impl<'io> Vm<'io> {
    /// Build a machine whose zero array holds `program`, registers zeroed
    /// and the program counter at 0.
    pub fn new(
        program: Vec<u32>,
        input: impl Read + 'io,
        output: impl Write + 'io,
    ) -> Self {
        Vm {
            registers: RegisterFile::new(),
            pc: 0,
            store: ArrayStore::new(program),
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Run until `halt` or a fault.
    pub fn run(&mut self) -> Result<(), VmError> {
        loop {
            if self.step()? == ExecState::Halted {
                return Ok(());
            }
        }
    }

    /// Fetch, decode and execute a single instruction.
    pub fn step(&mut self) -> Result<ExecState, VmError> {
        let word = self.store.read(0, self.pc)?;
        let ins = Instruction::decode(word);

        trace!(
            "pc={:08x} op={} a={} b={} c={}",
            self.pc,
            ins.opcode(),
            ins.a(),
            ins.b(),
            ins.c(),
        );

        match ins.opcode() {
            Opcode::Cmov => {
                if self.reg(ins.c()) != 0 {
                    let val = self.reg(ins.b());
                    self.set_reg(ins.a(), val);
                }
                self.advance();
            }
            Opcode::Aidx => {
                let id = self.reg(ins.b());
                let index = self.reg(ins.c());
                let val = self.store.read(id, index)?;
                self.set_reg(ins.a(), val);
                self.advance();
            }
            Opcode::Aupd => {
                let id = self.reg(ins.a());
                let index = self.reg(ins.b());
                let val = self.reg(ins.c());
                self.store.write(id, index, val)?;
                self.advance();
            }
            Opcode::Add => {
                let val = self.reg(ins.b()).wrapping_add(self.reg(ins.c()));
                self.set_reg(ins.a(), val);
                self.advance();
            }
            Opcode::Mul => {
                let val = self.reg(ins.b()).wrapping_mul(self.reg(ins.c()));
                self.set_reg(ins.a(), val);
                self.advance();
            }
            Opcode::Div => {
                let divisor = self.reg(ins.c());
                if divisor == 0 {
                    return Err(VmError::DivideByZero);
                }
                let val = self.reg(ins.b()) / divisor;
                self.set_reg(ins.a(), val);
                self.advance();
            }
            Opcode::Nand => {
                let val = !(self.reg(ins.b()) & self.reg(ins.c()));
                self.set_reg(ins.a(), val);
                self.advance();
            }
            Opcode::Halt => return Ok(ExecState::Halted),
            Opcode::Alloc => {
                let len = self.reg(ins.c());
                let id = self.store.allocate(len)?;
                self.set_reg(ins.b(), id);
                self.advance();
            }
            Opcode::Free => {
                let id = self.reg(ins.c());
                self.store.free(id)?;
                self.advance();
            }
            Opcode::Out => {
                let byte = (self.reg(ins.c()) % 256) as u8;
                self.output.write_all(&[byte])?;
                self.output.flush()?;
                self.advance();
            }
            Opcode::In => {
                let mut byte = [0u8; 1];
                let val = match self.input.read(&mut byte)? {
                    0 => 0xFFFF_FFFF,
                    _ => byte[0] as u32,
                };
                self.set_reg(ins.c(), val);
                self.advance();
            }
            Opcode::LoadProgram => {
                let id = self.reg(ins.b());
                self.store.clone_into_zero(id)?;
                self.pc = self.reg(ins.c());
            }
            Opcode::LoadImm => {
                self.set_reg(ins.imm_reg(), ins.immediate());
                self.advance();
            }
            Opcode::Invalid => {
                return Err(VmError::InvalidOpcode(word, self.pc));
            }
        }

        Ok(ExecState::Running)
    }

    fn reg(&self, idx: RegIdx) -> u32 {
        self.registers.read(idx)
    }

    fn set_reg(&mut self, idx: RegIdx, value: u32) {
        self.registers.write(idx, value);
    }

    fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }
}
