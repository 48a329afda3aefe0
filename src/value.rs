//! Exact fixed-point numbers for abacus totals.

use std::fmt;
use std::str::FromStr;

use crate::error::AbacusError;

/// Base-10 fixed-point number.
///
/// `digits` holds every digit most significant first, the last `scale` of
/// them after the decimal point. The integer part never carries leading
/// zeros beyond a single `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    digits: Vec<u8>,
    scale: u32,
}

impl Decimal {
    pub fn zero(scale: u32) -> Self {
        Self::from_places(std::iter::empty(), scale)
    }

    /// Sums `value * 10^exponent` over `places`, carrying between columns.
    ///
    /// Places below `10^-scale` are dropped.
    pub fn from_places(places: impl IntoIterator<Item = (u32, i32)>, scale: u32) -> Self {
        // Little-endian columns, column 0 is 10^-scale.
        let mut columns: Vec<u32> = vec![0; scale as usize + 1];
        for (value, exponent) in places {
            let column = exponent + scale as i32;
            if column < 0 {
                continue;
            }
            let column = column as usize;
            if column >= columns.len() {
                columns.resize(column + 1, 0);
            }
            columns[column] += value;
        }

        let mut carry = 0;
        for column in columns.iter_mut() {
            let sum = *column + carry;
            *column = sum % 10;
            carry = sum / 10;
        }
        while carry > 0 {
            columns.push(carry % 10);
            carry /= 10;
        }

        let mut digits: Vec<u8> = columns.iter().rev().map(|&d| d as u8).collect();
        let integer_len = digits.len() - scale as usize;
        let leading = digits[..integer_len - 1]
            .iter()
            .take_while(|&&d| d == 0)
            .count();
        digits.drain(..leading);
        Self { digits, scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// The digit in the `10^exponent` place.
    pub fn digit(&self, exponent: i32) -> u8 {
        let column = exponent + self.scale as i32;
        if column < 0 || column as usize >= self.digits.len() {
            return 0;
        }
        self.digits[self.digits.len() - 1 - column as usize]
    }

    /// Non-zero digits with their place exponents, most significant first.
    pub fn places(&self) -> impl Iterator<Item = (i32, u8)> + '_ {
        let top = self.digits.len() as i32 - 1 - self.scale as i32;
        self.digits
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != 0)
            .map(move |(i, &d)| (top - i as i32, d))
    }

    /// Lossy conversion for display widgets that want a float.
    pub fn to_f64(&self) -> f64 {
        let mantissa = self
            .digits
            .iter()
            .fold(0.0_f64, |acc, &d| acc * 10.0 + d as f64);
        mantissa / 10f64.powi(self.scale as i32)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        let digits = value
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Self { digits, scale: 0 }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let split = self.digits.len() - self.scale as usize;
        for d in &self.digits[..split] {
            write!(f, "{d}")?;
        }
        if self.scale > 0 {
            f.write_str(".")?;
            for d in &self.digits[split..] {
                write!(f, "{d}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Decimal {
    type Err = AbacusError;

    /// Accepts plain non-negative numbers such as `109`, `5.2` or `.75`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || AbacusError::Unrepresentable(s.to_string());
        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }
        let scale = fraction.len() as u32;
        let places = integer
            .bytes()
            .chain(fraction.bytes())
            .rev()
            .enumerate()
            .map(|(i, b)| ((b - b'0') as u32, i as i32 - scale as i32));
        Ok(Self::from_places(places, scale))
    }
}
