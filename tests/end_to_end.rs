use bbc_mos6502::{Bus, Cpu, Ram, StatusFlag};

fn machine() -> (Cpu, Bus) {
    let mut bus = Bus::new();
    bus.add_addressable(Box::new(Ram::new())).unwrap();
    (Cpu::new(), bus)
}

fn load_program(bus: &mut Bus, cpu: &mut Cpu, bytes: &[u8]) {
    bus.write_multiple(bytes, 0x0200).unwrap();
    cpu.pc = 0x0200;
}

#[test]
fn scenario_lda_immediate() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xA9, 0x55]);
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x55);
    assert!(!cpu.status.get(StatusFlag::Zero));
    assert!(!cpu.status.get(StatusFlag::Negative));
    assert_eq!(bus.cycles() - before, 2);
}

#[test]
fn scenario_lda_then_sta_zero_page() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xA9, 0x55, 0x85, 0x80]);
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(bus.cycles() - before, 2 + 3);
    assert_eq!(bus.direct_read(0x0080).unwrap(), 0x55);
}

#[test]
fn scenario_lda_then_tax() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xA9, 0x55, 0xAA]);
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.x, 0x55);
    assert_eq!(cpu.a, 0x55);
    assert_eq!(bus.cycles() - before, 2 + 2);
}

#[test]
fn scenario_ldx_dex_bne_loop() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD]);
    cpu.execute_next(&mut bus).unwrap(); // LDX #3
    let mut branches_taken = 0;
    for _ in 0..6 {
        let pc_before = cpu.pc;
        cpu.execute_next(&mut bus).unwrap();
        if pc_before == 0x0203 && cpu.pc == 0x0202 {
            branches_taken += 1;
        }
    }
    assert_eq!(cpu.x, 0);
    assert!(cpu.status.get(StatusFlag::Zero));
    assert_eq!(branches_taken, 2);
}

#[test]
fn scenario_lda_asl_accumulator() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xA9, 0x80, 0x0A]);
    cpu.execute_next(&mut bus).unwrap();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.get(StatusFlag::Carry));
    assert!(cpu.status.get(StatusFlag::Zero));
    assert!(!cpu.status.get(StatusFlag::Negative));
}

#[test]
fn scenario_indirect_jmp_page_boundary_bug() {
    let (mut cpu, mut bus) = machine();
    bus.direct_write(0x10FF, 0x34).unwrap();
    bus.direct_write(0x1000, 0x12).unwrap();
    load_program(&mut bus, &mut cpu, &[0x6C, 0xFF, 0x10]);
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn property_stack_round_trip_preserves_sp() {
    let (mut cpu, mut bus) = machine();
    let original_sp = cpu.sp;
    let values = [0x01, 0x02, 0x03, 0x04, 0x05];
    for value in values {
        cpu.push(&mut bus, value).unwrap();
    }
    let mut popped = Vec::new();
    for _ in values {
        popped.push(cpu.pop(&mut bus).unwrap());
    }
    let mut expected = values.to_vec();
    expected.reverse();
    assert_eq!(popped, expected);
    assert_eq!(cpu.sp, original_sp);
}

#[test]
fn property_zero_page_x_wraps_within_zero_page() {
    let (mut cpu, mut bus) = machine();
    bus.direct_write(0x007F, 0x42).unwrap(); // (0xFF + 0x80) & 0xFF == 0x7F
    load_program(&mut bus, &mut cpu, &[0xB5, 0xFF]); // LDA $FF,X
    cpu.x = 0x80;
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn property_page_crossing_adds_one_cycle_on_absolute_x_read() {
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xBD, 0xFF, 0x01]); // LDA $01FF,X
    bus.direct_write(0x0200, 0x07).unwrap();
    cpu.x = 0x01;
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x07);
    assert_eq!(bus.cycles() - before, 5); // base 3 + 1 page-cross + 1 opcode fetch
}

#[test]
fn property_adc_overflow_law() {
    let (mut cpu, mut bus) = machine();
    cpu.a = 0x7F;
    load_program(&mut bus, &mut cpu, &[0x69, 0x01]); // ADC #1
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(cpu.a, 0x80);
    assert!(cpu.status.get(StatusFlag::Overflow));
}

#[test]
fn property_branch_cycle_law() {
    // Not taken: 2 cycles (opcode fetch + operand fetch).
    let (mut cpu, mut bus) = machine();
    load_program(&mut bus, &mut cpu, &[0xF0, 0x10]); // BEQ +16, Z=0
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(bus.cycles() - before, 2);

    // Taken, no page cross: 3 cycles.
    let (mut cpu, mut bus) = machine();
    cpu.status.set(StatusFlag::Zero, true);
    load_program(&mut bus, &mut cpu, &[0xF0, 0x10]); // BEQ +16
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(bus.cycles() - before, 3);

    // Taken, page cross: 4 cycles.
    let (mut cpu, mut bus) = machine();
    cpu.status.set(StatusFlag::Zero, true);
    bus.write_multiple(&[0xF0, 0x7F], 0x02F0).unwrap();
    cpu.pc = 0x02F0;
    let before = bus.cycles();
    cpu.execute_next(&mut bus).unwrap();
    assert_eq!(bus.cycles() - before, 4);
}

#[test]
fn property_opcode_uniqueness_is_enforced_at_construction() {
    // Cpu::new() builds the full opcode table; constructing one at all is
    // the regression test for opcode-uniqueness (a duplicate would panic
    // at construction, since the base instruction set is built once and
    // asserted consistent).
    let _cpu = Cpu::new();
}

#[test]
fn property_segment_disjointness_is_enforced_on_registration() {
    let mut bus = Bus::new();
    bus.add_addressable(Box::new(Ram::new())).unwrap();
    let err = bus.add_addressable(Box::new(Ram::new()));
    assert!(err.is_err());
}
