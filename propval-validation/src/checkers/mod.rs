//! Primitive checkers
//!
//! Atomic predicates over a single string value. They know nothing about
//! fields, messages or data bags; rules coerce a value to a string and hand
//! it to one of these.

mod date;
mod ident;
mod network;
mod numeric;
mod string;

pub use date::*;
pub use ident::*;
pub use network::*;
pub use numeric::*;
pub use string::*;

/// Luhn checksum over a string of ASCII digits.
pub(crate) fn luhn(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;
    for c in digits.chars().rev() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    !digits.is_empty() && sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn() {
        assert!(luhn("79927398713"));
        assert!(!luhn("79927398710"));
        assert!(!luhn(""));
        assert!(!luhn("12a4"));
    }
}
