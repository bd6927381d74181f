//! Currency and order-number formatting used by [`super::transform_orders`].

use rust_decimal::{Decimal, RoundingStrategy};

/// How currency amounts are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Literal prefix, e.g. `$`.
    pub symbol: String,
    /// Thousands separator in the integer part.
    pub group_separator: char,
    /// Separator between integer and fractional part.
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Render `amount` with two decimals and grouped thousands, e.g. `$1,500.00`.
///
/// Midpoints round away from zero. Negative amounts keep the sign after the symbol (`$-12.50`).
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}{}{}{}{}",
        format.symbol,
        if negative { "-" } else { "" },
        group_digits(int_part, format.group_separator),
        format.decimal_separator,
        frac_part
    )
}

/// `ORD-` followed by the id zero-padded to six digits.
pub fn order_number(id: i32) -> String {
    if id < 0 {
        format!("ORD--{:06}", i64::from(id).unsigned_abs())
    } else {
        format!("ORD-{id:06}")
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
