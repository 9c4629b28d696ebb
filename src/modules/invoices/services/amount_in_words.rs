//! Renders a whole-rupee amount in English words for the printed invoice.
//!
//! Grouping follows the short scale (Thousand, Million, Billion). Paise are
//! not rendered; the amount passed in is the already-rounded grand total.

const UNITS: [&str; 11] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

const TEENS: [&str; 9] = [
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [(u64, &str); 3] = [
    (1_000_000_000, "Billion"),
    (1_000_000, "Million"),
    (1_000, "Thousand"),
];

/// `1180` → `"One Thousand One Hundred and Eighty Rupees Only"`,
/// `0` → `"Zero Rupees"`.
pub fn amount_in_words(rupees: u64) -> String {
    if rupees == 0 {
        return "Zero Rupees".to_string();
    }

    format!("{} Rupees Only", number_to_words(rupees))
}

/// Words for a positive number without the currency suffix
pub fn number_to_words(number: u64) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut remainder = number;

    for (scale, name) in SCALES {
        let count = remainder / scale;
        remainder %= scale;

        if count == 0 {
            continue;
        }

        // Counts of a thousand billion and above recurse
        let count_words = if count >= 1000 {
            number_to_words(count)
        } else {
            below_thousand(count)
        };
        words.push(format!("{} {}", count_words, name));
    }

    if remainder > 0 {
        words.push(below_thousand(remainder));
    }

    words.join(" ")
}

fn below_thousand(number: u64) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut rest = number as usize;

    if rest >= 100 {
        parts.push(UNITS[rest / 100]);
        parts.push("Hundred");
        rest %= 100;
        if rest > 0 {
            parts.push("and");
        }
    }

    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        rest %= 10;
    } else if rest >= 11 {
        parts.push(TEENS[rest - 11]);
        rest = 0;
    }

    if rest > 0 {
        parts.push(UNITS[rest]);
    }

    parts.join(" ")
}
