//! Register file, status flags, stack, program counter, and the
//! decode-execute loop. The CPU never owns the bus; every operation that
//! touches memory takes it as an explicit parameter.

use log::trace;

use crate::access_class::{AccessClass, Operation};
use crate::addressing;
use crate::addressing_mode::AddressingMode;
use crate::bus::Bus;
use crate::error::Result;
use crate::instruction::{InstructionDescriptor, InstructionTable};
use crate::interrupt::{IRQ_VECTOR, RESET_VECTOR};
use crate::mnemonic::Mnemonic;
use crate::register::Register;
use crate::segment::{address_from_bytes, address_to_bytes, same_page_offset, STACK_SEGMENT};
use crate::status::{Status, StatusFlag};

pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    table: InstructionTable,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: 0,
            status: Status::new(),
            table: InstructionTable::build(&base_instruction_set())
                .expect("base instruction set is internally consistent"),
        }
    }

    /// Read the byte at PC through the bus and advance PC by one.
    pub fn next_byte(&mut self, bus: &mut Bus) -> Result<u8> {
        let value = bus.direct_read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Read the little-endian word at PC through the bus and advance PC by
    /// two.
    pub fn next_word(&mut self, bus: &mut Bus) -> Result<u16> {
        let low = self.next_byte(bus)?;
        let high = self.next_byte(bus)?;
        Ok(address_from_bytes(low, high))
    }

    /// Write `value` at `0x0100 | S`, then decrement S, wrapping modulo
    /// 256.
    pub fn push(&mut self, bus: &mut Bus, value: u8) -> Result<()> {
        bus.direct_write(STACK_SEGMENT.start | u16::from(self.sp), value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increment S, wrapping modulo 256, then read at `0x0100 | S`.
    pub fn pop(&mut self, bus: &mut Bus) -> Result<u8> {
        self.sp = self.sp.wrapping_add(1);
        bus.direct_read(STACK_SEGMENT.start | u16::from(self.sp))
    }

    /// Reset the register file to its power-up state and load PC from the
    /// reset vector. Does not touch the bus's components or clock (that
    /// is `Bus::reset`'s responsibility, run separately, and usually
    /// before a program image is loaded).
    pub fn reset(&mut self, bus: &mut Bus) -> Result<()> {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.status = Status::new();
        self.status.set(StatusFlag::InterruptDisable, true);
        for _ in 0..3 {
            bus.tick()?;
        }
        let low = bus.direct_read(RESET_VECTOR)?;
        let high = bus.direct_read(RESET_VECTOR + 1)?;
        self.pc = address_from_bytes(low, high);
        Ok(())
    }

    /// Fetch one opcode byte at PC, advance PC, and dispatch it through the
    /// addressing engine to its operation.
    pub fn execute_next(&mut self, bus: &mut Bus) -> Result<()> {
        let opcode = bus.direct_read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        let signature = self.table.lookup(opcode)?;
        trace!(
            "opcode {:#04x} -> {} {}",
            opcode,
            signature.mnemonic,
            signature.addressing_mode
        );
        match signature.operation {
            Operation::Read(op) => {
                let value = addressing::fetch_read(signature.addressing_mode, self, bus)?;
                op(self, value);
            }
            Operation::Write(op) => {
                let value = op(self);
                addressing::store_write(signature.addressing_mode, self, bus, value)?;
            }
            Operation::ReadModifyWrite(op) => {
                addressing::read_modify_write(signature.addressing_mode, self, bus, op)?;
            }
            Operation::Implied(op) => {
                bus.tick()?;
                op(self, bus)?;
            }
            Operation::Relative(predicate) => {
                addressing::branch(self, bus, predicate)?;
            }
            Operation::Jump(op) => {
                op(self, bus)?;
            }
        }
        Ok(())
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}

fn read_register(cpu: &Cpu, register: Register) -> u8 {
    match register {
        Register::A => cpu.a,
        Register::X => cpu.x,
        Register::Y => cpu.y,
        Register::StackPointer => cpu.sp,
        Register::Status => cpu.status.0,
    }
}

fn write_register(cpu: &mut Cpu, register: Register, value: u8) {
    match register {
        Register::A => cpu.a = value,
        Register::X => cpu.x = value,
        Register::Y => cpu.y = value,
        Register::StackPointer => cpu.sp = value,
        Register::Status => cpu.status = Status::from(value),
    }
}

// --- Load / store ----------------------------------------------------

fn load(cpu: &mut Cpu, register: Register, value: u8) {
    write_register(cpu, register, value);
    cpu.status.set_zero_and_negative(value);
}

fn op_lda(cpu: &mut Cpu, value: u8) {
    load(cpu, Register::A, value);
}

fn op_ldx(cpu: &mut Cpu, value: u8) {
    load(cpu, Register::X, value);
}

fn op_ldy(cpu: &mut Cpu, value: u8) {
    load(cpu, Register::Y, value);
}

fn op_sta(cpu: &mut Cpu) -> u8 {
    read_register(cpu, Register::A)
}

fn op_stx(cpu: &mut Cpu) -> u8 {
    read_register(cpu, Register::X)
}

fn op_sty(cpu: &mut Cpu) -> u8 {
    read_register(cpu, Register::Y)
}

// --- Transfer ----------------------------------------------------------

fn op_tax(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    let value = cpu.a;
    cpu.x = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_tay(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    let value = cpu.a;
    cpu.y = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_txa(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    let value = cpu.x;
    cpu.a = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_tya(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    let value = cpu.y;
    cpu.a = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_tsx(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    let value = cpu.sp;
    cpu.x = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_txs(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.sp = cpu.x;
    Ok(())
}

// --- Stack ---------------------------------------------------------------

fn op_pha(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    let value = cpu.a;
    cpu.push(bus, value)
}

fn op_php(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    let value = cpu.status.with(StatusFlag::Break, true).0;
    cpu.push(bus, value)
}

fn op_pla(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    bus.tick()?;
    let value = cpu.pop(bus)?;
    cpu.a = value;
    cpu.status.set_zero_and_negative(value);
    Ok(())
}

fn op_plp(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    bus.tick()?;
    let value = cpu.pop(bus)?;
    cpu.status = Status::from(value);
    Ok(())
}

// --- Logical -------------------------------------------------------------

fn op_and(cpu: &mut Cpu, value: u8) {
    cpu.a &= value;
    cpu.status.set_zero_and_negative(cpu.a);
}

fn op_eor(cpu: &mut Cpu, value: u8) {
    cpu.a ^= value;
    cpu.status.set_zero_and_negative(cpu.a);
}

fn op_ora(cpu: &mut Cpu, value: u8) {
    cpu.a |= value;
    cpu.status.set_zero_and_negative(cpu.a);
}

fn op_bit(cpu: &mut Cpu, value: u8) {
    let result = cpu.a & value;
    cpu.status.set(StatusFlag::Zero, result == 0);
    cpu.status.set(StatusFlag::Negative, value & 0x80 != 0);
    cpu.status.set(StatusFlag::Overflow, value & 0x40 != 0);
}

// --- Increment / decrement -------------------------------------------

fn op_inc(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    cpu.status.set_zero_and_negative(result);
    result
}

fn op_dec(cpu: &mut Cpu, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    cpu.status.set_zero_and_negative(result);
    result
}

fn op_inx(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero_and_negative(cpu.x);
    Ok(())
}

fn op_iny(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero_and_negative(cpu.y);
    Ok(())
}

fn op_dex(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero_and_negative(cpu.x);
    Ok(())
}

fn op_dey(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero_and_negative(cpu.y);
    Ok(())
}

// --- Arithmetic ------------------------------------------------------

fn add(cpu: &mut Cpu, operand: u8) {
    let carry_in = u8::from(cpu.status.get(StatusFlag::Carry));
    let (partial, carry1) = cpu.a.overflowing_add(operand);
    let (sum, carry2) = partial.overflowing_add(carry_in);
    let overflow = (!(cpu.a ^ operand) & (cpu.a ^ sum) & 0x80) != 0;
    cpu.status.set(StatusFlag::Carry, carry1 || carry2);
    cpu.status.set(StatusFlag::Overflow, overflow);
    cpu.status.set_zero_and_negative(sum);
    cpu.a = sum;
}

fn op_adc(cpu: &mut Cpu, value: u8) {
    add(cpu, value);
}

fn op_sbc(cpu: &mut Cpu, value: u8) {
    add(cpu, !value);
}

fn compare(cpu: &mut Cpu, register_value: u8, operand: u8) {
    let result = register_value.wrapping_sub(operand);
    cpu.status.set(StatusFlag::Carry, register_value >= operand);
    cpu.status.set(StatusFlag::Zero, result == 0);
    cpu.status.set(StatusFlag::Negative, result & 0x80 != 0);
}

fn op_cmp(cpu: &mut Cpu, value: u8) {
    compare(cpu, cpu.a, value);
}

fn op_cpx(cpu: &mut Cpu, value: u8) {
    compare(cpu, cpu.x, value);
}

fn op_cpy(cpu: &mut Cpu, value: u8) {
    compare(cpu, cpu.y, value);
}

// --- Shifts ------------------------------------------------------------

fn op_asl(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = value & 0x80 != 0;
    let result = value << 1;
    cpu.status.set(StatusFlag::Carry, carry);
    cpu.status.set_zero_and_negative(result);
    result
}

fn op_lsr(cpu: &mut Cpu, value: u8) -> u8 {
    let carry = value & 0x01 != 0;
    let result = value >> 1;
    cpu.status.set(StatusFlag::Carry, carry);
    cpu.status.set_zero_and_negative(result);
    result
}

fn op_rol(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = u8::from(cpu.status.get(StatusFlag::Carry));
    let carry_out = value & 0x80 != 0;
    let result = (value << 1) | carry_in;
    cpu.status.set(StatusFlag::Carry, carry_out);
    cpu.status.set_zero_and_negative(result);
    result
}

fn op_ror(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = u8::from(cpu.status.get(StatusFlag::Carry));
    let carry_out = value & 0x01 != 0;
    let result = (value >> 1) | (carry_in << 7);
    cpu.status.set(StatusFlag::Carry, carry_out);
    cpu.status.set_zero_and_negative(result);
    result
}

// --- Status flags ------------------------------------------------------

fn op_clc(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::Carry, false);
    Ok(())
}

fn op_sec(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::Carry, true);
    Ok(())
}

fn op_cld(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::DecimalMode, false);
    Ok(())
}

fn op_sed(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::DecimalMode, true);
    Ok(())
}

fn op_cli(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::InterruptDisable, false);
    Ok(())
}

fn op_sei(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::InterruptDisable, true);
    Ok(())
}

fn op_clv(cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    cpu.status.set(StatusFlag::Overflow, false);
    Ok(())
}

// --- Branches ------------------------------------------------------------

fn op_bcc(cpu: &Cpu) -> bool {
    !cpu.status.get(StatusFlag::Carry)
}

fn op_bcs(cpu: &Cpu) -> bool {
    cpu.status.get(StatusFlag::Carry)
}

fn op_bne(cpu: &Cpu) -> bool {
    !cpu.status.get(StatusFlag::Zero)
}

fn op_beq(cpu: &Cpu) -> bool {
    cpu.status.get(StatusFlag::Zero)
}

fn op_bpl(cpu: &Cpu) -> bool {
    !cpu.status.get(StatusFlag::Negative)
}

fn op_bmi(cpu: &Cpu) -> bool {
    cpu.status.get(StatusFlag::Negative)
}

fn op_bvc(cpu: &Cpu) -> bool {
    !cpu.status.get(StatusFlag::Overflow)
}

fn op_bvs(cpu: &Cpu) -> bool {
    cpu.status.get(StatusFlag::Overflow)
}

// --- Jumps ---------------------------------------------------------------

fn op_jmp_absolute(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    cpu.pc = cpu.next_word(bus)?;
    Ok(())
}

fn op_jmp_indirect(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    let pointer = cpu.next_word(bus)?;
    let low = bus.direct_read(pointer)?;
    let high = bus.direct_read(same_page_offset(pointer, 1))?;
    cpu.pc = address_from_bytes(low, high);
    Ok(())
}

fn op_jsr(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    let target = cpu.next_word(bus)?;
    bus.tick()?;
    let return_address = cpu.pc.wrapping_sub(1);
    let (low, high) = address_to_bytes(return_address);
    cpu.push(bus, high)?;
    cpu.push(bus, low)?;
    cpu.pc = target;
    Ok(())
}

fn op_rts(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    let low = cpu.pop(bus)?;
    let high = cpu.pop(bus)?;
    for _ in 0..3 {
        bus.tick()?;
    }
    cpu.pc = address_from_bytes(low, high).wrapping_add(1);
    Ok(())
}

// --- System --------------------------------------------------------------

fn op_brk(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    cpu.pc = cpu.pc.wrapping_add(1);
    let (low, high) = address_to_bytes(cpu.pc);
    cpu.push(bus, high)?;
    cpu.push(bus, low)?;
    let status_byte = cpu.status.with(StatusFlag::Break, true).0;
    cpu.push(bus, status_byte)?;
    cpu.status.set(StatusFlag::InterruptDisable, true);
    let vector_low = bus.direct_read(IRQ_VECTOR)?;
    let vector_high = bus.direct_read(IRQ_VECTOR + 1)?;
    cpu.pc = address_from_bytes(vector_low, vector_high);
    Ok(())
}

fn op_rti(cpu: &mut Cpu, bus: &mut Bus) -> Result<()> {
    bus.tick()?;
    let status_byte = cpu.pop(bus)?;
    cpu.status = Status::from(status_byte);
    let low = cpu.pop(bus)?;
    let high = cpu.pop(bus)?;
    cpu.pc = address_from_bytes(low, high);
    Ok(())
}

fn op_nop(_cpu: &mut Cpu, _bus: &mut Bus) -> Result<()> {
    Ok(())
}

/// The base instruction set: one descriptor per (mnemonic, addressing-mode
/// family), mapping every official 6502 opcode to its addressing mode.
/// Registered once at `Cpu::new()`.
fn base_instruction_set() -> Vec<InstructionDescriptor> {
    use AddressingMode::*;

    vec![
        InstructionDescriptor {
            mnemonic: Mnemonic::Lda,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_lda),
            opcodes: &[
                (0xA9, Immediate),
                (0xA5, ZeroPage),
                (0xB5, ZeroPageX),
                (0xAD, Absolute),
                (0xBD, AbsoluteX),
                (0xB9, AbsoluteY),
                (0xA1, IndirectX),
                (0xB1, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Ldx,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_ldx),
            opcodes: &[(0xA2, Immediate), (0xA6, ZeroPage), (0xB6, ZeroPageY), (0xAE, Absolute), (0xBE, AbsoluteY)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Ldy,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_ldy),
            opcodes: &[(0xA0, Immediate), (0xA4, ZeroPage), (0xB4, ZeroPageX), (0xAC, Absolute), (0xBC, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sta,
            access_class: AccessClass::Write,
            operation: Operation::Write(op_sta),
            opcodes: &[
                (0x85, ZeroPage),
                (0x95, ZeroPageX),
                (0x8D, Absolute),
                (0x9D, AbsoluteX),
                (0x99, AbsoluteY),
                (0x81, IndirectX),
                (0x91, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Stx,
            access_class: AccessClass::Write,
            operation: Operation::Write(op_stx),
            opcodes: &[(0x86, ZeroPage), (0x96, ZeroPageY), (0x8E, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sty,
            access_class: AccessClass::Write,
            operation: Operation::Write(op_sty),
            opcodes: &[(0x84, ZeroPage), (0x94, ZeroPageX), (0x8C, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Tax,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_tax),
            opcodes: &[(0xAA, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Tay,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_tay),
            opcodes: &[(0xA8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Txa,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_txa),
            opcodes: &[(0x8A, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Tya,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_tya),
            opcodes: &[(0x98, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Tsx,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_tsx),
            opcodes: &[(0xBA, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Txs,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_txs),
            opcodes: &[(0x9A, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Pha,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_pha),
            opcodes: &[(0x48, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Php,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_php),
            opcodes: &[(0x08, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Pla,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_pla),
            opcodes: &[(0x68, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Plp,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_plp),
            opcodes: &[(0x28, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::And,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_and),
            opcodes: &[
                (0x29, Immediate),
                (0x25, ZeroPage),
                (0x35, ZeroPageX),
                (0x2D, Absolute),
                (0x3D, AbsoluteX),
                (0x39, AbsoluteY),
                (0x21, IndirectX),
                (0x31, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Eor,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_eor),
            opcodes: &[
                (0x49, Immediate),
                (0x45, ZeroPage),
                (0x55, ZeroPageX),
                (0x4D, Absolute),
                (0x5D, AbsoluteX),
                (0x59, AbsoluteY),
                (0x41, IndirectX),
                (0x51, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Ora,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_ora),
            opcodes: &[
                (0x09, Immediate),
                (0x05, ZeroPage),
                (0x15, ZeroPageX),
                (0x0D, Absolute),
                (0x1D, AbsoluteX),
                (0x19, AbsoluteY),
                (0x01, IndirectX),
                (0x11, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bit,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_bit),
            opcodes: &[(0x24, ZeroPage), (0x2C, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Adc,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_adc),
            opcodes: &[
                (0x69, Immediate),
                (0x65, ZeroPage),
                (0x75, ZeroPageX),
                (0x6D, Absolute),
                (0x7D, AbsoluteX),
                (0x79, AbsoluteY),
                (0x61, IndirectX),
                (0x71, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sbc,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_sbc),
            opcodes: &[
                (0xE9, Immediate),
                (0xE5, ZeroPage),
                (0xF5, ZeroPageX),
                (0xED, Absolute),
                (0xFD, AbsoluteX),
                (0xF9, AbsoluteY),
                (0xE1, IndirectX),
                (0xF1, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Cmp,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_cmp),
            opcodes: &[
                (0xC9, Immediate),
                (0xC5, ZeroPage),
                (0xD5, ZeroPageX),
                (0xCD, Absolute),
                (0xDD, AbsoluteX),
                (0xD9, AbsoluteY),
                (0xC1, IndirectX),
                (0xD1, IndirectY),
            ],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Cpx,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_cpx),
            opcodes: &[(0xE0, Immediate), (0xE4, ZeroPage), (0xEC, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Cpy,
            access_class: AccessClass::Read,
            operation: Operation::Read(op_cpy),
            opcodes: &[(0xC0, Immediate), (0xC4, ZeroPage), (0xCC, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Inc,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_inc),
            opcodes: &[(0xE6, ZeroPage), (0xF6, ZeroPageX), (0xEE, Absolute), (0xFE, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Inx,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_inx),
            opcodes: &[(0xE8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Iny,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_iny),
            opcodes: &[(0xC8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Dec,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_dec),
            opcodes: &[(0xC6, ZeroPage), (0xD6, ZeroPageX), (0xCE, Absolute), (0xDE, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Dex,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_dex),
            opcodes: &[(0xCA, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Dey,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_dey),
            opcodes: &[(0x88, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Asl,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_asl),
            opcodes: &[(0x0A, Accumulator), (0x06, ZeroPage), (0x16, ZeroPageX), (0x0E, Absolute), (0x1E, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Lsr,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_lsr),
            opcodes: &[(0x4A, Accumulator), (0x46, ZeroPage), (0x56, ZeroPageX), (0x4E, Absolute), (0x5E, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Rol,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_rol),
            opcodes: &[(0x2A, Accumulator), (0x26, ZeroPage), (0x36, ZeroPageX), (0x2E, Absolute), (0x3E, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Ror,
            access_class: AccessClass::ReadModifyWrite,
            operation: Operation::ReadModifyWrite(op_ror),
            opcodes: &[(0x6A, Accumulator), (0x66, ZeroPage), (0x76, ZeroPageX), (0x6E, Absolute), (0x7E, AbsoluteX)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Jmp,
            access_class: AccessClass::JumpAccess,
            operation: Operation::Jump(op_jmp_absolute),
            opcodes: &[(0x4C, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Jmp,
            access_class: AccessClass::JumpAccess,
            operation: Operation::Jump(op_jmp_indirect),
            opcodes: &[(0x6C, Indirect)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Jsr,
            access_class: AccessClass::JumpAccess,
            operation: Operation::Jump(op_jsr),
            opcodes: &[(0x20, Absolute)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Rts,
            access_class: AccessClass::JumpAccess,
            operation: Operation::Jump(op_rts),
            opcodes: &[(0x60, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bcc,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bcc),
            opcodes: &[(0x90, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bcs,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bcs),
            opcodes: &[(0xB0, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bne,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bne),
            opcodes: &[(0xD0, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Beq,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_beq),
            opcodes: &[(0xF0, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bpl,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bpl),
            opcodes: &[(0x10, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bmi,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bmi),
            opcodes: &[(0x30, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bvc,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bvc),
            opcodes: &[(0x50, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Bvs,
            access_class: AccessClass::RelativeAccess,
            operation: Operation::Relative(op_bvs),
            opcodes: &[(0x70, Relative)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Clc,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_clc),
            opcodes: &[(0x18, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sec,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_sec),
            opcodes: &[(0x38, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Cld,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_cld),
            opcodes: &[(0xD8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sed,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_sed),
            opcodes: &[(0xF8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Cli,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_cli),
            opcodes: &[(0x58, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Sei,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_sei),
            opcodes: &[(0x78, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Clv,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_clv),
            opcodes: &[(0xB8, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Brk,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_brk),
            opcodes: &[(0x00, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Rti,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_rti),
            opcodes: &[(0x40, Implied)],
        },
        InstructionDescriptor {
            mnemonic: Mnemonic::Nop,
            access_class: AccessClass::ImpliedAccess,
            operation: Operation::Implied(op_nop),
            opcodes: &[(0xEA, Implied)],
        },
    ]
}
