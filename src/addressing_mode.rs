use std::fmt;

/// The thirteen 6502 addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand; the opcode alone determines behavior.
    Implied,
    /// Operates on the accumulator directly.
    Accumulator,
    /// The operand byte itself is the value.
    Immediate,
    /// One-byte operand, an address in the zero page.
    ZeroPage,
    /// Zero-page operand indexed by X, wrapping within the zero page.
    ZeroPageX,
    /// Zero-page operand indexed by Y, wrapping within the zero page.
    ZeroPageY,
    /// Two-byte little-endian absolute address.
    Absolute,
    /// Absolute address indexed by X.
    AbsoluteX,
    /// Absolute address indexed by Y.
    AbsoluteY,
    /// Signed 8-bit displacement from the address of the next instruction.
    Relative,
    /// Two-byte pointer to a two-byte little-endian address.
    Indirect,
    /// Zero-page pointer indexed by X before dereferencing.
    IndirectX,
    /// Zero-page pointer dereferenced, then indexed by Y.
    IndirectY,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AddressingMode::Implied => "Implied",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::ZeroPage => "ZeroPage",
            AddressingMode::ZeroPageX => "ZeroPageX",
            AddressingMode::ZeroPageY => "ZeroPageY",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "AbsoluteX",
            AddressingMode::AbsoluteY => "AbsoluteY",
            AddressingMode::Relative => "Relative",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::IndirectX => "IndirectX",
            AddressingMode::IndirectY => "IndirectY",
        };
        write!(f, "{}", name)
    }
}
