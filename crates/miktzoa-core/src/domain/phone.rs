//! Israeli phone number shaping for form inputs and read-only display.
//!
//! Both entry points are total: any text goes in, a string comes out. Only
//! ASCII digits carry meaning; everything else is formatting noise.

const COUNTRY_CODE: &str = "972";
const TRUNK_PREFIX: char = '0';
const LOCAL_NUMBER_LEN: usize = 10;
const AREA_CODE_LEN: usize = 3;

/// Reshapes a phone field's current value while the user is typing.
///
/// A leading `972` country code becomes the `0` trunk prefix. Once at least
/// ten digits are present the value is cut to `DDD-DDDDDDD`; shorter input is
/// returned as bare digits.
pub fn normalize_on_input(raw: &str) -> String {
    let mut digits = digits_only(raw);
    if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        digits = format!("{TRUNK_PREFIX}{rest}");
    }

    if digits.len() >= LOCAL_NUMBER_LEN {
        group_local_number(&digits)
    } else {
        digits
    }
}

/// Formats a stored phone value for display.
///
/// Only a ten digit local number starting with `0` is regrouped; anything
/// else is handed back exactly as given.
pub fn format_for_display(phone: &str) -> String {
    let digits = digits_only(phone);
    if digits.len() == LOCAL_NUMBER_LEN && digits.starts_with(TRUNK_PREFIX) {
        return group_local_number(&digits);
    }
    phone.to_string()
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

// Callers guarantee at least LOCAL_NUMBER_LEN ASCII digits.
fn group_local_number(digits: &str) -> String {
    let mut out = String::with_capacity(LOCAL_NUMBER_LEN + 1);
    out.push_str(&digits[..AREA_CODE_LEN]);
    out.push('-');
    out.push_str(&digits[AREA_CODE_LEN..LOCAL_NUMBER_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::{format_for_display, normalize_on_input};

    const SAMPLES: [&str; 16] = [
        "",
        "   ",
        "abc",
        "12345",
        "0501234567",
        "050-1234567",
        "972501234567",
        "+972 50-123-4567",
        "05012345678901",
        "972",
        "9725",
        "9729725012345",
        "(03) 555 1234",
        "טלפון: 054 7654321",
        "٠٥٠١٢٣٤٥٦٧",
        "15551234",
    ];

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize_on_input(""), "");
    }

    #[test]
    fn normalize_groups_local_number() {
        assert_eq!(normalize_on_input("0501234567"), "050-1234567");
    }

    #[test]
    fn normalize_replaces_country_code() {
        assert_eq!(normalize_on_input("972501234567"), "050-1234567");
        assert_eq!(normalize_on_input("+972 50-123-4567"), "050-1234567");
    }

    #[test]
    fn normalize_keeps_short_input_bare() {
        assert_eq!(normalize_on_input("12345"), "12345");
        assert_eq!(normalize_on_input("050-123"), "050123");
    }

    #[test]
    fn normalize_short_country_code_input() {
        assert_eq!(normalize_on_input("972"), "0");
        assert_eq!(normalize_on_input("9725"), "05");
    }

    #[test]
    fn normalize_truncates_extra_digits() {
        assert_eq!(normalize_on_input("05012345678901"), "050-1234567");
    }

    #[test]
    fn normalize_strips_letters_and_non_ascii_digits() {
        assert_eq!(normalize_on_input("abc"), "");
        assert_eq!(normalize_on_input("טלפון: 054 7654321"), "054-7654321");
        assert_eq!(normalize_on_input("٠٥٠١٢٣٤٥٦٧"), "");
    }

    #[test]
    fn normalize_output_shape() {
        for sample in SAMPLES {
            let value = normalize_on_input(sample);
            let hyphens: Vec<usize> = value.match_indices('-').map(|(idx, _)| idx).collect();
            assert!(hyphens.len() <= 1, "{sample:?} -> {value:?}");
            if let Some(idx) = hyphens.first() {
                assert_eq!(*idx, 3, "{sample:?} -> {value:?}");
            }
            assert!(
                value.chars().all(|ch| ch.is_ascii_digit() || ch == '-'),
                "{sample:?} -> {value:?}"
            );
        }
    }

    #[test]
    fn normalize_reaches_fixed_point() {
        for sample in SAMPLES {
            let once = normalize_on_input(sample);
            assert_eq!(normalize_on_input(&once), once, "{sample:?}");
        }
    }

    #[test]
    fn display_groups_local_number() {
        assert_eq!(format_for_display("0501234567"), "050-1234567");
        assert_eq!(format_for_display("(050) 123 4567"), "050-1234567");
    }

    #[test]
    fn display_is_stable_on_formatted_value() {
        assert_eq!(format_for_display("050-1234567"), "050-1234567");
    }

    #[test]
    fn display_passes_unrecognized_values_through() {
        assert_eq!(format_for_display("15551234"), "15551234");
        assert_eq!(format_for_display("+972 50 123 4567"), "+972 50 123 4567");
        assert_eq!(format_for_display("1501234567"), "1501234567");
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("n/a"), "n/a");
    }

    #[test]
    fn display_is_idempotent() {
        for sample in SAMPLES {
            let once = format_for_display(sample);
            assert_eq!(format_for_display(&once), once, "{sample:?}");
        }
    }
}
