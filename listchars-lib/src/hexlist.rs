//! Format codepoints for the output file.

/// One lowercase hexadecimal value per line, no `0x` prefix.
///
/// Callers are expected to pass codepoints in ascending order; this
/// function writes them as given.
pub fn hex_lines(codepoints: impl IntoIterator<Item = u32>) -> String {
    let mut out = String::new();
    for cp in codepoints {
        out.push_str(&format!("{:x}\n", cp));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_hex_without_prefix() {
        assert_eq!(hex_lines([0x41, 0x42]), "41\n42\n");
    }

    #[test]
    fn no_lines_for_no_codepoints() {
        assert_eq!(hex_lines([0u32; 0]), "");
    }

    #[test]
    fn codepoints_beyond_the_bmp() {
        assert_eq!(hex_lines([0x1F600]), "1f600\n");
    }

    #[test]
    fn round_trips_through_parse() {
        let cps = [0x20u32, 0x41, 0xDF, 0x1F600];
        let parsed: Vec<u32> = hex_lines(cps)
            .lines()
            .map(|line| u32::from_str_radix(line, 16).unwrap())
            .collect();
        assert_eq!(parsed, cps);
    }
}
