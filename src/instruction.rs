use crate::access_class::{AccessClass, Operation};
use crate::addressing_mode::AddressingMode;
use crate::error::{Error, Result};
use crate::mnemonic::Mnemonic;

/// What the 256-entry opcode table stores for a mapped opcode byte: enough
/// to run the addressing engine and dispatch the operation, with no further
/// lookup.
#[derive(Clone, Copy)]
pub struct InstructionSignature {
    pub mnemonic: Mnemonic,
    pub addressing_mode: AddressingMode,
    pub operation: Operation,
}

/// One semantic instruction: a mnemonic, the access class its operation
/// implements, the operation itself, and every (opcode, addressing mode)
/// pair that instantiates it.
pub struct InstructionDescriptor {
    pub mnemonic: Mnemonic,
    pub access_class: AccessClass,
    pub operation: Operation,
    pub opcodes: &'static [(u8, AddressingMode)],
}

/// The compile-time-shaped 256-entry opcode dispatch table, indexed
/// directly by opcode byte.
pub struct InstructionTable {
    entries: Box<[Option<InstructionSignature>; 256]>,
}

impl InstructionTable {
    fn empty() -> InstructionTable {
        InstructionTable { entries: Box::new([None; 256]) }
    }

    /// Build the table from the base instruction set, rejecting a
    /// descriptor whose operation doesn't match its declared access class,
    /// and any opcode claimed by more than one descriptor.
    pub fn build(descriptors: &[InstructionDescriptor]) -> Result<InstructionTable> {
        let mut table = InstructionTable::empty();
        for descriptor in descriptors {
            table.register(descriptor)?;
        }
        Ok(table)
    }

    fn register(&mut self, descriptor: &InstructionDescriptor) -> Result<()> {
        if descriptor.operation.access_class() != descriptor.access_class {
            return Err(Error::SignatureMismatch(descriptor.mnemonic.to_string()));
        }
        for &(opcode, addressing_mode) in descriptor.opcodes {
            if self.entries[opcode as usize].is_some() {
                return Err(Error::Duplicate(format!("opcode {:#04x}", opcode)));
            }
            self.entries[opcode as usize] = Some(InstructionSignature {
                mnemonic: descriptor.mnemonic,
                addressing_mode,
                operation: descriptor.operation,
            });
        }
        Ok(())
    }

    pub fn lookup(&self, opcode: u8) -> Result<InstructionSignature> {
        self.entries[opcode as usize].ok_or(Error::UnknownOpcode(opcode))
    }
}
