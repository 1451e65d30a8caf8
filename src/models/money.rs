//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendbook::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".5".
    /// More than two decimal places is rejected rather than truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        parse_decimal(s, false)
    }

    /// Parse an amount read back from the ledger file
    ///
    /// Older files were written with binary floats, so this also accepts
    /// extra decimal places (rounded half away from zero to the cent) and
    /// exponent notation such as "1e+16".
    pub fn parse_stored(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.contains(['e', 'E']) {
            return parse_exponent(trimmed);
        }
        parse_decimal(trimmed, true)
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format without a currency symbol, as written to the ledger file
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }

    /// Amount as a floating-point number, for ratios and chart scaling
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

// Operators saturate at the i64 bounds; use `checked_add` where an
// overflow must be reported.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

fn parse_decimal(input: &str, round_extra: bool) -> Result<Money, MoneyParseError> {
    let original = input.trim();
    let invalid = || MoneyParseError::InvalidFormat(original.to_string());

    let (negative, s) = match original.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, original),
    };
    let s = s.strip_prefix('$').unwrap_or(s);

    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }
    if fraction.len() > 2 && !round_extra {
        return Err(MoneyParseError::TooManyDecimals(original.to_string()));
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    let digit = |i: usize| fraction.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
    let round_up = i64::from(digit(2) >= 5);
    let cents = digit(0) * 10 + digit(1) + round_up;

    let total = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or_else(invalid)?;

    Ok(Money(if negative { -total } else { total }))
}

fn parse_exponent(input: &str) -> Result<Money, MoneyParseError> {
    let invalid = || MoneyParseError::InvalidFormat(input.to_string());

    let value: f64 = input.parse().map_err(|_| invalid())?;
    let cents = (value * 100.0).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
        return Err(invalid());
    }

    Ok(Money(cents as i64))
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooManyDecimals(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::TooManyDecimals(s) => {
                write!(f, "Amount '{}' has more than two decimal places", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(10000).to_plain_string(), "100.00");
        assert_eq!(Money::from_cents(-250).to_plain_string(), "-2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(" 30.0 ").unwrap().cents(), 3000);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_rejects_extra_decimals() {
        assert_eq!(
            Money::parse("10.999"),
            Err(MoneyParseError::TooManyDecimals("10.999".to_string()))
        );
        assert!(Money::parse("0.001").is_err());
    }

    #[test]
    fn test_parse_stored() {
        assert_eq!(Money::parse_stored("100.0").unwrap().cents(), 10000);
        assert_eq!(Money::parse_stored("0.30000000000000004").unwrap().cents(), 30);
        assert_eq!(Money::parse_stored("10.995").unwrap().cents(), 1100);
        assert_eq!(Money::parse_stored("-2.345").unwrap().cents(), -235);
        assert_eq!(
            Money::parse_stored("1e+16").unwrap().cents(),
            1_000_000_000_000_000_000
        );
        assert_eq!(Money::parse_stored("2.5E2").unwrap().cents(), 25000);
        assert!(Money::parse_stored("1e+20").is_err());
        assert!(Money::parse_stored("inf").is_err());
        assert!(Money::parse_stored("abc").is_err());
    }

    #[test]
    fn test_checked_add() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(max + Money::from_cents(1), max);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["", "-", "abc", "12abc", "1.2.3", "10.5x", "1,000", ".", "1e3", "+5"] {
            assert!(Money::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!(Money::parse("99999999999999999999").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
