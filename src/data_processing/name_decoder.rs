const HEX_DIGITS_PER_UNIT: usize = 4;
const PLACEHOLDER: u16 = 0xFFFD;

/// Decodes a character name as stored in save files.
///
/// Names are stored as UTF-16 code units written as 4 hex digits each, with no
/// separators: `"00480069"` is `"Hi"`. A trailing group shorter than 4 digits
/// is decoded as-is. A group that is not valid hex becomes U+FFFD instead of
/// failing the whole name, as does an unpaired surrogate.
///
/// # Arguments
///
/// * `encoded` - The raw value of the `name` key.
///
/// # Returns
///
/// The decoded display name.
pub fn decode_name(encoded: &str) -> String {
    let digits: Vec<char> = encoded.chars().collect();
    let units: Vec<u16> = digits
        .chunks(HEX_DIGITS_PER_UNIT)
        .map(|group| {
            let group: String = group.iter().collect();
            u16::from_str_radix(&group, 16).unwrap_or(PLACEHOLDER)
        })
        .collect();
    String::from_utf16_lossy(&units)
}

/// Encodes a display name the way save files store it. Inverse of [`decode_name`].
pub fn encode_name(name: &str) -> String {
    name.encode_utf16().map(|unit| format!("{unit:04x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii_name() {
        assert_eq!(decode_name("00480069"), "Hi");
        assert_eq!(decode_name("004A0075006E006B006F"), "Junko");
    }

    #[test]
    fn decodes_non_latin_and_surrogate_pairs() {
        assert_eq!(decode_name("00c9006c00e8006e0065"), "Élène");
        assert_eq!(decode_name("d83dde80"), "🚀");
    }

    #[test]
    fn round_trips_through_encoding() {
        for name in ["Hi", "Trent", "[LN]-Juni", "Ærø 42", "名前", "🚀 pilot", ""] {
            let encoded = encode_name(name);
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(decode_name(&encoded), name);
        }
    }

    #[test]
    fn hex_round_trips_through_decoding() {
        for encoded in ["00480069", "004A0075006E006B006F", "00C6007200F8", "540d524d", "d83dde800020", ""] {
            assert_eq!(encode_name(&decode_name(encoded)), encoded.to_ascii_lowercase());
        }
    }

    #[test]
    fn lone_surrogate_does_not_round_trip() {
        // Rust strings cannot hold an unpaired surrogate, so it comes back as U+FFFD.
        assert_eq!(encode_name(&decode_name("d800")), "fffd");
        assert_eq!(encode_name(&decode_name("0048dc000069")), "0048fffd0069");
    }

    #[test]
    fn short_trailing_group_is_decoded_as_is() {
        // "41" alone is 0x41.
        assert_eq!(decode_name("004841"), "HA");
    }

    #[test]
    fn invalid_hex_only_garbles_its_own_group() {
        assert_eq!(decode_name("0048zzzz0069"), "H\u{FFFD}i");
        assert_eq!(decode_name("zz"), "\u{FFFD}");
        assert_eq!(decode_name(""), "");
    }
}
