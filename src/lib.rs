//! A cycle-accurate software emulator of the MOS 6502 microprocessor as
//! used in a BBC Micro-class machine: an opcode decoder and instruction
//! interpreter, an addressing-mode fetch/store engine, and the
//! memory-mapped bus and clock they run against.
//!
//! The three pieces are deliberately decoupled: [`Bus`] owns addressing and
//! timing, [`Cpu`] holds the register file and decode-execute loop and
//! takes the bus as an explicit parameter to every operation, and
//! [`addressing`] is the engine that runs the correct bus sequence for
//! each (access class, addressing mode) pair so cycle counts match
//! hardware.

pub mod access_class;
pub mod addressing;
pub mod addressing_mode;
pub mod bus;
pub mod clock;
pub mod cpu;
pub mod error;
pub mod instruction;
pub mod interrupt;
pub mod memory;
pub mod mnemonic;
pub mod register;
pub mod segment;
pub mod status;

pub use bus::{Addressable, Bus, Component};
pub use clock::Clock;
pub use cpu::Cpu;
pub use error::{Error, Result};
pub use memory::Ram;
pub use mnemonic::Mnemonic;
pub use register::Register;
pub use segment::Segment;
pub use status::{Status, StatusFlag};
