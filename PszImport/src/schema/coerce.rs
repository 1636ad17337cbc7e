//! Numeric coercion for loosely-typed content fields
//!
//! Authors write some numbers as strings, occasionally with a unit marker
//! (`"12m"`, `"90°"`). Coercion never fails: anything unreadable becomes the
//! field default.

use crate::formats::Value;

/// Trailing unit markers stripped before parsing.
const UNIT_MARKERS: &[char] = &['m', '°'];

/// Read a real number, accepting decorated strings.
#[must_use]
pub fn decorated_f64(value: Option<&Value>, default: f64) -> f64 {
    match value {
        Some(Value::Int(i)) => *i as f64,
        Some(Value::Float(f)) => *f,
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches(UNIT_MARKERS)
            .trim_end()
            .parse()
            .unwrap_or(default),
        _ => default,
    }
}

/// Read an integer-typed field.
///
/// Numbers are kept verbatim (a float stays a float), numeric strings are
/// parsed, and everything else yields `default`.
#[must_use]
pub fn integer_value(value: Option<&Value>, default: i64) -> Value {
    match value {
        Some(Value::Int(i)) => Value::Int(*i),
        Some(Value::Float(f)) => Value::Float(*f),
        Some(Value::String(s)) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Value::Int(i)
            } else if let Ok(f) = s.parse::<f64>() {
                Value::Float(f)
            } else {
                Value::Int(default)
            }
        }
        _ => Value::Int(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorated_strings() {
        assert_eq!(decorated_f64(Some(&Value::from("12m")), 0.0), 12.0);
        assert_eq!(decorated_f64(Some(&Value::from(" 90° ")), 0.0), 90.0);
        assert_eq!(decorated_f64(Some(&Value::from("1.5")), 0.0), 1.5);
    }

    #[test]
    fn test_unparseable_falls_back() {
        assert_eq!(decorated_f64(Some(&Value::from("abc")), 0.0), 0.0);
        assert_eq!(decorated_f64(Some(&Value::from("")), 2.5), 2.5);
        assert_eq!(decorated_f64(Some(&Value::Null), 0.0), 0.0);
        assert_eq!(decorated_f64(None, 4.0), 4.0);
        assert_eq!(decorated_f64(Some(&Value::Bool(true)), 0.0), 0.0);
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(decorated_f64(Some(&Value::Int(3)), 0.0), 3.0);
        assert_eq!(decorated_f64(Some(&Value::Float(0.25)), 0.0), 0.25);
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(integer_value(Some(&Value::Int(7)), 0), Value::Int(7));
        assert_eq!(integer_value(Some(&Value::Float(1.5)), 0), Value::Float(1.5));
        assert_eq!(integer_value(Some(&Value::from("42")), 0), Value::Int(42));
        assert_eq!(integer_value(Some(&Value::from("2.5")), 0), Value::Float(2.5));
        assert_eq!(integer_value(Some(&Value::from("lots")), 1), Value::Int(1));
        assert_eq!(integer_value(Some(&Value::Null), 10), Value::Int(10));
        assert_eq!(integer_value(None, 100), Value::Int(100));
    }
}
