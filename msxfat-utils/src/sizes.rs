/// Parse a partition size: a bare sector count, or a byte size with a
/// `k`/`m` suffix (one sector is 512 bytes, so `720k` is 1440 sectors).
pub fn parse(text: &str) -> Result<u32, String> {
    let text = text.trim();
    let (digits, sectors_per_unit) = match text.as_bytes().last() {
        Some(b'k' | b'K') => (&text[..text.len() - 1], 2u32),
        Some(b'm' | b'M') => (&text[..text.len() - 1], 2048),
        _ => (text, 1),
    };
    let value: u32 = digits.parse().map_err(|_| format!("invalid size: {}", text))?;
    value.checked_mul(sectors_per_unit).ok_or_else(|| format!("size out of range: {}", text))
}
