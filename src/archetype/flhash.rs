const POLYNOMIAL: u32 = 0xA001;
const LOGICAL_BITS: u32 = 30;
const PHYSICAL_BITS: u32 = 32;

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ (POLYNOMIAL << (LOGICAL_BITS - 16))
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Computes the game's id for a nickname.
///
/// Nicknames are hashed case-insensitively, so `"LI_ELITE"` and `"li_elite"`
/// produce the same id. Every id has its high bit set.
pub fn nickname_hash(nickname: &str) -> u32 {
    let mut hash = nickname.bytes().fold(0u32, |hash, byte| {
        let byte = byte.to_ascii_lowercase() as u32;
        (hash >> 8) ^ TABLE[((hash ^ byte) & 0xFF) as usize]
    });
    hash = hash.swap_bytes();
    (hash >> (PHYSICAL_BITS - LOGICAL_BITS)) | 0x8000_0000
}
