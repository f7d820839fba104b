use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Generate a random `#RRGGBB` color, drawing each hex digit uniformly.
///
/// Letters are always uppercase.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        let digit = HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())];
        color.push(char::from(digit));
    }
    color
}

/// Return `true` for a complete `#RRGGBB` value.
pub fn is_valid_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') || value.len() != 7 {
        return false;
    }
    chars.all(|ch| ch.is_ascii_hexdigit())
}
