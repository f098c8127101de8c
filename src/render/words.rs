//! English cardinal numbers for the "Amount in words" row.
//!
//! British style: hundreds are joined to their remainder with "and",
//! thousand groups are separated by commas, and a trailing group below one
//! hundred is joined with "and" (`1005` is "one thousand and five").

use rust_decimal::Decimal;

use crate::calculation::rounded_units;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Short scale, one entry per group of three digits; covers u128::MAX.
const SCALES: [&str; 13] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

fn below_hundred(n: u128) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}

fn below_thousand(n: u128) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (_, 0) => format!("{} hundred", ONES[hundreds as usize]),
        _ => format!("{} hundred and {}", ONES[hundreds as usize], below_hundred(rest)),
    }
}

fn unsigned_words(mut n: u128) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }

    let mut words = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !words.is_empty() {
            words.push_str(if scale == 0 && group < 100 { " and " } else { ", " });
        }
        words.push_str(&below_thousand(group));
        if scale > 0 {
            words.push(' ');
            words.push_str(SCALES[scale]);
        }
    }
    words
}

/// Spells out an integer in lower-case English.
///
/// # Examples
///
/// ```
/// use payslip_engine::render::cardinal_words;
///
/// assert_eq!(cardinal_words(0), "zero");
/// assert_eq!(cardinal_words(21), "twenty-one");
/// assert_eq!(cardinal_words(1005), "one thousand and five");
/// assert_eq!(cardinal_words(-40), "minus forty");
/// ```
pub fn cardinal_words(n: i128) -> String {
    if n < 0 {
        format!("minus {}", unsigned_words(n.unsigned_abs()))
    } else {
        unsigned_words(n.unsigned_abs())
    }
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}

/// Renders a rounded amount as title-cased words followed by "Only".
///
/// # Examples
///
/// ```
/// use payslip_engine::render::amount_in_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     amount_in_words(Decimal::from(18_450)),
///     "Eighteen Thousand, Four Hundred And Fifty Only"
/// );
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    format!("{} Only", title_case(&cardinal_words(rounded_units(amount))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(cardinal_words(7), "seven");
        assert_eq!(cardinal_words(13), "thirteen");
        assert_eq!(cardinal_words(40), "forty");
        assert_eq!(cardinal_words(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds_join_with_and() {
        assert_eq!(cardinal_words(100), "one hundred");
        assert_eq!(cardinal_words(105), "one hundred and five");
        assert_eq!(cardinal_words(999), "nine hundred and ninety-nine");
    }

    #[test]
    fn test_thousand_groups() {
        assert_eq!(cardinal_words(1000), "one thousand");
        assert_eq!(cardinal_words(1100), "one thousand, one hundred");
        assert_eq!(cardinal_words(1050), "one thousand and fifty");
        assert_eq!(cardinal_words(18450), "eighteen thousand, four hundred and fifty");
        assert_eq!(cardinal_words(101_000), "one hundred and one thousand");
    }

    #[test]
    fn test_millions_skip_empty_groups() {
        assert_eq!(cardinal_words(1_000_005), "one million and five");
        assert_eq!(cardinal_words(2_005_000), "two million, five thousand");
        assert_eq!(
            cardinal_words(1_234_567),
            "one million, two hundred and thirty-four thousand, five hundred and sixty-seven"
        );
    }

    #[test]
    fn test_extremes() {
        assert!(cardinal_words(i128::MAX).starts_with("one hundred and seventy undecillion"));
        assert!(cardinal_words(i128::MIN).starts_with("minus one hundred and seventy"));
    }

    #[test]
    fn test_title_case_matches_hyphenated_words() {
        assert_eq!(title_case("twenty-one thousand"), "Twenty-One Thousand");
        assert_eq!(title_case("one hundred and five"), "One Hundred And Five");
    }

    #[test]
    fn test_amount_in_words_rounds_first() {
        assert_eq!(amount_in_words(Decimal::new(4495, 1)), "Four Hundred And Fifty Only");
        assert_eq!(amount_in_words(Decimal::ZERO), "Zero Only");
        assert_eq!(amount_in_words(Decimal::new(-46, 1)), "Minus Five Only");
    }
}
