use std::fmt;

/// The 56 official 6502 mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Load / store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Transfer
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Logical
    And,
    Eor,
    Ora,
    Bit,
    // Arithmetic
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    // Increment / decrement
    Inc,
    Inx,
    Iny,
    Dec,
    Dex,
    Dey,
    // Shifts
    Asl,
    Lsr,
    Rol,
    Ror,
    // Jumps / calls
    Jmp,
    Jsr,
    Rts,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    // Status flags
    Clc,
    Sec,
    Cld,
    Sed,
    Cli,
    Sei,
    Clv,
    // System
    Brk,
    Rti,
    Nop,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
