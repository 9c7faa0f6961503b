use super::constants::{ADC_OVERFLOW, ADC_VALUE_MASK};

/*
    The SKI-ROC ADC counters are Gray coded, so every register holding a
    sample has to be converted back to plain binary before any arithmetic
    is done on it. The converter is the standard XOR-prefix cascade from
    the most significant bit down.
 */

/// Convert a 12-bit Gray code to binary.
pub fn gray_to_binary(gray: u16) -> u16 {
    let mut result = gray & (1 << 11);
    for bit in (0..11).rev() {
        result |= (gray ^ (result >> 1)) & (1 << bit);
    }
    result
}

/// Convert a 12-bit binary value to its Gray code. This is the exact
/// inverse of [`gray_to_binary`]; the decoder itself never needs it, but
/// block generators and tests do.
pub fn binary_to_gray(value: u16) -> u16 {
    value ^ (value >> 1)
}

/// Decode one raw ADC-bearing register: mask to the low 12 bits, undo the
/// Gray coding, and apply the sentinel remaps. A decoded 0 means the counter
/// saturated, so it becomes 4096; a decoded 4 is how a true zero comes out
/// of the chip, so it becomes 0. Every ADC read anywhere in the pipeline
/// must go through here, or boundary samples will disagree with the
/// hardware.
pub fn decode_adc(raw: u32) -> u16 {
    let adc = gray_to_binary((raw & ADC_VALUE_MASK) as u16);
    match adc {
        0 => ADC_OVERFLOW,
        4 => 0,
        value => value,
    }
}
