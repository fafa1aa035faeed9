//! The addressing-mode fetch/store engine: for each (access class,
//! addressing mode) pair, runs the exact bus sequence 6502 hardware runs,
//! including the dummy reads and page-crossing ticks that make cycle
//! counts match silicon. Instruction operations never touch the bus
//! directly for operand fetch/store; they go through here.

use crate::access_class::{ReadModifyWriteOperation, RelativeOperation};
use crate::addressing_mode::AddressingMode;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::error::Result;
use crate::segment::address_from_bytes;

/// Fetch the single byte a `Read`-class operation consumes.
pub fn fetch_read(mode: AddressingMode, cpu: &mut Cpu, bus: &mut Bus) -> Result<u8> {
    match mode {
        AddressingMode::Immediate => cpu.next_byte(bus),
        AddressingMode::ZeroPage => {
            let address = u16::from(cpu.next_byte(bus)?);
            bus.direct_read(address)
        }
        AddressingMode::ZeroPageX => read_zero_page_indexed(cpu, bus, cpu.x),
        AddressingMode::ZeroPageY => read_zero_page_indexed(cpu, bus, cpu.y),
        AddressingMode::Absolute => {
            let address = cpu.next_word(bus)?;
            bus.direct_read(address)
        }
        AddressingMode::AbsoluteX => {
            let base = cpu.next_word(bus)?;
            let (value, _) = bus.offset_read(base, cpu.x, false)?;
            Ok(value)
        }
        AddressingMode::AbsoluteY => {
            let base = cpu.next_word(bus)?;
            let (value, _) = bus.offset_read(base, cpu.y, false)?;
            Ok(value)
        }
        AddressingMode::IndirectX => {
            let address = indexed_indirect_address(cpu, bus)?;
            bus.direct_read(address)
        }
        AddressingMode::IndirectY => {
            let base = indirect_indexed_base(cpu, bus)?;
            let (value, _) = bus.offset_read(base, cpu.y, false)?;
            Ok(value)
        }
        _ => unreachable!("addressing mode {} has no Read sequence", mode),
    }
}

/// Store the byte a `Write`-class operation produced.
pub fn store_write(mode: AddressingMode, cpu: &mut Cpu, bus: &mut Bus, value: u8) -> Result<()> {
    match mode {
        AddressingMode::ZeroPage => {
            let address = u16::from(cpu.next_byte(bus)?);
            bus.direct_write(address, value)
        }
        AddressingMode::ZeroPageX => write_zero_page_indexed(cpu, bus, cpu.x, value),
        AddressingMode::ZeroPageY => write_zero_page_indexed(cpu, bus, cpu.y, value),
        AddressingMode::Absolute => {
            let address = cpu.next_word(bus)?;
            bus.direct_write(address, value)
        }
        AddressingMode::AbsoluteX => write_absolute_indexed(cpu, bus, cpu.x, value),
        AddressingMode::AbsoluteY => write_absolute_indexed(cpu, bus, cpu.y, value),
        AddressingMode::IndirectX => {
            let address = indexed_indirect_address(cpu, bus)?;
            bus.direct_write(address, value)
        }
        AddressingMode::IndirectY => {
            let base = indirect_indexed_base(cpu, bus)?;
            bus.tick()?;
            let address = base.wrapping_add(u16::from(cpu.y));
            bus.direct_write(address, value)
        }
        _ => unreachable!("addressing mode {} has no Write sequence", mode),
    }
}

/// Run a `ReadModifyWrite` instruction: fetch the operand the way the
/// matching `Read` variant would (forcing the page-crossing tick on
/// indexed modes, since RMW always re-reads before writing back), spend
/// one ALU tick, apply `operation`, then write the result to the same
/// effective address.
pub fn read_modify_write(
    mode: AddressingMode,
    cpu: &mut Cpu,
    bus: &mut Bus,
    operation: ReadModifyWriteOperation,
) -> Result<()> {
    match mode {
        AddressingMode::Accumulator => {
            bus.tick()?;
            let result = operation(cpu, cpu.a);
            cpu.a = result;
            cpu.status.set_zero_and_negative(result);
        }
        AddressingMode::ZeroPage => {
            let address = u16::from(cpu.next_byte(bus)?);
            let value = bus.direct_read(address)?;
            bus.tick()?;
            let result = operation(cpu, value);
            bus.direct_write(address, result)
        }
        AddressingMode::ZeroPageX => {
            let base = cpu.next_byte(bus)?;
            bus.tick()?;
            let address = u16::from(base.wrapping_add(cpu.x));
            let value = bus.direct_read(address)?;
            bus.tick()?;
            let result = operation(cpu, value);
            bus.direct_write(address, result)
        }
        AddressingMode::Absolute => {
            let address = cpu.next_word(bus)?;
            let value = bus.direct_read(address)?;
            bus.tick()?;
            let result = operation(cpu, value);
            bus.direct_write(address, result)
        }
        AddressingMode::AbsoluteX => rmw_indexed(cpu, bus, cpu.x, operation),
        AddressingMode::AbsoluteY => rmw_indexed(cpu, bus, cpu.y, operation),
        AddressingMode::IndirectX => {
            let address = indexed_indirect_address(cpu, bus)?;
            let value = bus.direct_read(address)?;
            bus.tick()?;
            let result = operation(cpu, value);
            bus.direct_write(address, result)
        }
        AddressingMode::IndirectY => {
            let base = indirect_indexed_base(cpu, bus)?;
            let (value, address) = bus.offset_read(base, cpu.y, true)?;
            bus.tick()?;
            let result = operation(cpu, value);
            bus.direct_write(address, result)
        }
        _ => unreachable!("addressing mode {} has no ReadModifyWrite sequence", mode),
    }
}

fn rmw_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8, operation: ReadModifyWriteOperation) -> Result<()> {
    let base = cpu.next_word(bus)?;
    let (value, address) = bus.offset_read(base, index, true)?;
    bus.tick()?;
    let result = operation(cpu, value);
    bus.direct_write(address, result)
}

/// Run a conditional branch: fetch the signed displacement, evaluate the
/// predicate, and, if taken, spend one tick and a second if the branch
/// target lands on a different page than the instruction after the branch.
pub fn branch(cpu: &mut Cpu, bus: &mut Bus, predicate: RelativeOperation) -> Result<()> {
    let offset = cpu.next_byte(bus)? as i8;
    if !predicate(cpu) {
        return Ok(());
    }
    bus.tick()?;
    let old_pc = cpu.pc;
    let new_pc = old_pc.wrapping_add(offset as i16 as u16);
    if (old_pc & 0xFF00) != (new_pc & 0xFF00) {
        bus.tick()?;
    }
    cpu.pc = new_pc;
    Ok(())
}

fn read_zero_page_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8) -> Result<u8> {
    let base = cpu.next_byte(bus)?;
    bus.tick()?;
    let address = u16::from(base.wrapping_add(index));
    bus.direct_read(address)
}

fn write_zero_page_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8, value: u8) -> Result<()> {
    let base = cpu.next_byte(bus)?;
    bus.tick()?;
    let address = u16::from(base.wrapping_add(index));
    bus.direct_write(address, value)
}

fn write_absolute_indexed(cpu: &mut Cpu, bus: &mut Bus, index: u8, value: u8) -> Result<()> {
    let base = cpu.next_word(bus)?;
    bus.tick()?;
    let address = base.wrapping_add(u16::from(index));
    bus.direct_write(address, value)
}

/// `(IndirectX)`: the zero-page pointer is indexed by X before the
/// dereference, and the pointer itself wraps within the zero page.
fn indexed_indirect_address(cpu: &mut Cpu, bus: &mut Bus) -> Result<u16> {
    let pointer = cpu.next_byte(bus)?;
    bus.tick()?;
    let indexed = pointer.wrapping_add(cpu.x);
    let low = bus.direct_read(u16::from(indexed))?;
    let high = bus.direct_read(u16::from(indexed.wrapping_add(1)))?;
    Ok(address_from_bytes(low, high))
}

/// `(IndirectY)`: the zero-page pointer is dereferenced first, then the
/// resulting address is indexed by Y.
fn indirect_indexed_base(cpu: &mut Cpu, bus: &mut Bus) -> Result<u16> {
    let pointer = cpu.next_byte(bus)?;
    let low = bus.direct_read(u16::from(pointer))?;
    let high = bus.direct_read(u16::from(pointer.wrapping_add(1)))?;
    Ok(address_from_bytes(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Ram;

    fn cpu_and_bus() -> (Cpu, Bus) {
        let mut bus = Bus::new();
        bus.add_addressable(Box::new(Ram::new())).unwrap();
        (Cpu::new(), bus)
    }

    #[test]
    fn immediate_read_consumes_one_byte_and_one_tick() {
        let (mut cpu, mut bus) = cpu_and_bus();
        bus.write_multiple(&[0x55], 0x0200).unwrap();
        cpu.pc = 0x0200;
        let before = bus.cycles();
        let value = fetch_read(AddressingMode::Immediate, &mut cpu, &mut bus).unwrap();
        assert_eq!(value, 0x55);
        assert_eq!(cpu.pc, 0x0201);
        assert_eq!(bus.cycles() - before, 1);
    }

    #[test]
    fn absolute_x_read_ticks_extra_on_page_cross() {
        let (mut cpu, mut bus) = cpu_and_bus();
        bus.write_multiple(&[0xFF, 0x01], 0x0300).unwrap(); // operand = 0x01FF
        bus.write_multiple(&[0x99], 0x0200).unwrap(); // 0x01FF + 1 = 0x0200
        cpu.pc = 0x0300;
        cpu.x = 0x01;
        let before = bus.cycles();
        let value = fetch_read(AddressingMode::AbsoluteX, &mut cpu, &mut bus).unwrap();
        assert_eq!(value, 0x99);
        assert_eq!(bus.cycles() - before, 3);
    }

    #[test]
    fn branch_not_taken_costs_two_cycles() {
        let (mut cpu, mut bus) = cpu_and_bus();
        bus.write_multiple(&[0xFD], 0x0200).unwrap();
        cpu.pc = 0x0200;
        let before = bus.cycles();
        branch(&mut cpu, &mut bus, |_| false).unwrap();
        assert_eq!(bus.cycles() - before, 1);
        assert_eq!(cpu.pc, 0x0201);
    }

    #[test]
    fn branch_taken_without_page_cross_costs_three_cycles_total() {
        let (mut cpu, mut bus) = cpu_and_bus();
        bus.write_multiple(&[0x02], 0x0200).unwrap();
        cpu.pc = 0x0200;
        let before = bus.cycles();
        branch(&mut cpu, &mut bus, |_| true).unwrap();
        assert_eq!(bus.cycles() - before, 2);
        assert_eq!(cpu.pc, 0x0203);
    }

    #[test]
    fn branch_taken_with_page_cross_costs_three_extra_ticks() {
        let (mut cpu, mut bus) = cpu_and_bus();
        bus.write_multiple(&[0x7F], 0x02F0).unwrap();
        cpu.pc = 0x02F0;
        let before = bus.cycles();
        branch(&mut cpu, &mut bus, |_| true).unwrap();
        assert_eq!(bus.cycles() - before, 3);
        assert_eq!(cpu.pc, 0x0370);
    }
}
