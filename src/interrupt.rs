/// Where `reset()` loads the program counter from.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Where `BRK` and an (unimplemented) IRQ line load the program counter
/// from.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Reserved by hardware for a non-maskable interrupt line. Nothing in this
/// crate reads through it: asynchronous interrupt lines are out of scope.
pub const NMI_VECTOR: u16 = 0xFFFA;
