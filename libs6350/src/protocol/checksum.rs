// libs6350-rs/libs6350/src/protocol/checksum.rs

/// XOR of every byte in `bytes`. Frames carry this over all bytes that
/// precede the checksum pair.
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Second byte of the checksum pair: the bitwise NOT of the checksum.
pub fn complement(checksum: u8) -> u8 {
    checksum ^ 0xFF
}

/// Checksum pair `[checksum, complement]` for the given frame body.
pub fn checksum_pair(body: &[u8]) -> [u8; 2] {
    let sum = xor_checksum(body);
    [sum, complement(sum)]
}
