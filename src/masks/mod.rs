//! Positional digit masks for the structured wizard fields.
//!
//! Each formatter strips non-digit characters, truncates to the pattern
//! capacity, and re-derives the display form from scratch on every call.
//! Partial input renders only the separators already reached; a separator
//! never trails the last digit.

const TAX_ID_PATTERN: &str = "###.###.###-##";
const POSTAL_CODE_PATTERN: &str = "#####-###";
const DOCUMENT_PATTERN: &str = "##.###.###-#";
const DATE_PATTERN: &str = "##/##/####";

/// Keeps only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// 11-digit CPF: `XXX.XXX.XXX-XX`.
pub fn tax_id(input: &str) -> String {
    apply(input, TAX_ID_PATTERN)
}

/// 8-digit CEP: `XXXXX-XXX`.
pub fn postal_code(input: &str) -> String {
    apply(input, POSTAL_CODE_PATTERN)
}

/// 9-digit RG: `XX.XXX.XXX-X`.
pub fn document_number(input: &str) -> String {
    apply(input, DOCUMENT_PATTERN)
}

/// 8-digit day/month/year: `DD/MM/YYYY`.
pub fn date(input: &str) -> String {
    apply(input, DATE_PATTERN)
}

fn apply(input: &str, pattern: &str) -> String {
    let digits = digits_only(input);
    let mut source = digits.chars();
    let mut out = String::with_capacity(pattern.len());
    let mut pending = String::new();
    for slot in pattern.chars() {
        if slot == '#' {
            match source.next() {
                Some(digit) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(digit);
                }
                None => break,
            }
        } else {
            pending.push(slot);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_render_complete_input() {
        insta::assert_snapshot!(tax_id("52998224725"), @"529.982.247-25");
        insta::assert_snapshot!(postal_code("01310100"), @"01310-100");
        insta::assert_snapshot!(document_number("123456789"), @"12.345.678-9");
        insta::assert_snapshot!(date("01032025"), @"01/03/2025");
    }

    #[test]
    fn partial_input_renders_only_reached_separators() {
        assert_eq!(tax_id(""), "");
        assert_eq!(tax_id("123"), "123");
        assert_eq!(tax_id("1234"), "123.4");
        assert_eq!(tax_id("123456789"), "123.456.789");
        assert_eq!(tax_id("1234567890"), "123.456.789-0");
        assert_eq!(postal_code("01310"), "01310");
        assert_eq!(postal_code("013101"), "01310-1");
        assert_eq!(date("0103"), "01/03");
    }

    #[test]
    fn non_digits_are_stripped_before_formatting() {
        assert_eq!(tax_id("529.982.247-25"), "529.982.247-25");
        assert_eq!(tax_id("52a9b9c8"), "529.98");
        assert_eq!(date("01/03/2025"), "01/03/2025");
    }

    #[test]
    fn excess_digits_are_dropped() {
        assert_eq!(postal_code("0131010099"), "01310-100");
        assert_eq!(tax_id("529982247259999"), "529.982.247-25");
    }

    #[test]
    fn digits_survive_in_order_for_every_prefix() {
        let digits = "98765432109";
        for len in 0..=digits.len() {
            let masked = tax_id(&digits[..len]);
            assert_eq!(digits_only(&masked), digits[..len]);
        }
    }
}
