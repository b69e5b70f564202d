//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so sums and counts stay exact.
//! Provides parsing, rounding of averages, and the display formats used by
//! reports and exports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single expense may carry (ten billion units)
    pub const MAX_EXPENSE: Money = Money(1_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

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

    /// The amount as a floating-point number of whole units, for statistics
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Arithmetic mean of `count` amounts summing to `self`, rounded to the
    /// nearest cent (half away from zero). Returns `None` when `count` is 0.
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let total = Money::from_cents(1000);
    /// assert_eq!(total.average(3), Some(Money::from_cents(333)));
    /// assert_eq!(total.average(0), None);
    /// ```
    pub fn average(&self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let total = i128::from(self.0);
        let count = count as i128;
        let half = count / 2;
        let mean = if total >= 0 {
            (total + half) / count
        } else {
            (total - half) / count
        };
        // |mean| <= |total|, so this always fits
        Some(Self(mean as i64))
    }

    /// Add two amounts, `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00".
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();

        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };

        let s = s.strip_prefix('$').unwrap_or(s).replace(',', "");
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s.as_str(), ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = whole.parse().map_err(|_| invalid())?;
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. `€10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Format with a currency symbol and thousands separators, e.g. `$1,234.50`
    pub fn format_grouped(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }

    /// Plain decimal text without symbol or separators, e.g. `1234.50`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
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
    fn test_format_grouped() {
        assert_eq!(Money::from_cents(2400).format_grouped("$"), "$24.00");
        assert_eq!(Money::from_cents(123_456).format_grouped("$"), "$1,234.56");
        assert_eq!(
            Money::from_cents(123_456_789_00).format_grouped("€"),
            "€123,456,789.00"
        );
        assert_eq!(Money::from_cents(-100_000).format_grouped("$"), "-$1,000.00");
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(Money::from_cents(400).to_decimal_string(), "4.00");
        assert_eq!(Money::from_cents(123_456).to_decimal_string(), "1234.56");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("1,250.00").unwrap().cents(), 125_000);
        assert_eq!(Money::parse(" 4.00 ").unwrap().cents(), 400);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("1.é").is_err());
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        assert_eq!(Money::from_cents(1400).average(2), Some(Money::from_cents(700)));
        assert_eq!(Money::from_cents(5).average(2), Some(Money::from_cents(3)));
        assert_eq!(Money::from_cents(1000).average(3), Some(Money::from_cents(333)));
        assert_eq!(Money::from_cents(-5).average(2), Some(Money::from_cents(-3)));
        assert_eq!(Money::zero().average(0), None);
    }

    #[test]
    fn test_average_is_exact_for_large_totals() {
        // 2^53 + 1 cents is not representable as f64
        let total = Money::from_cents((1_i64 << 53) + 1);
        assert_eq!(total.average(1), Some(total));
        assert_eq!(
            Money::from_cents(i64::MAX).average(1),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Money::from_cents(400).checked_add(Money::from_cents(1000)),
            Some(Money::from_cents(1400))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
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
