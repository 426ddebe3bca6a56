//! Unit conversion.
//!
//! Sizing props arrive in pixels; styles emit rem so user font-size
//! preferences scale the whole component. The conversion is a pure
//! function, exposed on its own so it can be tested and reused by
//! variable resolvers.

/// Pixels per rem under the default document font size.
pub const DEFAULT_REM_SIZE: f64 = 16.0;

/// Convert pixels to a CSS rem string at 16px/rem.
///
/// ```
/// use weft_ui::style::px_to_rem;
/// assert_eq!(px_to_rem(40.0), "2.5rem");
/// ```
pub fn px_to_rem(px: f64) -> String {
    px_to_rem_base(px, DEFAULT_REM_SIZE)
}

/// Convert pixels to rem with an explicit rem size.
pub fn px_to_rem_base(px: f64, rem_size: f64) -> String {
    format!("{}rem", trim_number(px / rem_size))
}

/// Format with up to four decimal places, trailing zeros dropped.
fn trim_number(value: f64) -> String {
    let mut s = format!("{value:.4}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_rem_default_base() {
        assert_eq!(px_to_rem(40.0), "2.5rem");
        assert_eq!(px_to_rem(16.0), "1rem");
        assert_eq!(px_to_rem(4.0), "0.25rem");
        assert_eq!(px_to_rem(14.0), "0.875rem");
        assert_eq!(px_to_rem(0.0), "0rem");
    }

    #[test]
    fn test_px_to_rem_custom_base() {
        assert_eq!(px_to_rem_base(40.0, 10.0), "4rem");
        assert_eq!(px_to_rem_base(15.0, 10.0), "1.5rem");
    }

    #[test]
    fn test_px_to_rem_negative() {
        assert_eq!(px_to_rem(-8.0), "-0.5rem");
    }

    #[test]
    fn test_px_to_rem_rounds_to_four_places() {
        // 10 / 16 = 0.625 exactly; 10 / 2.333 is not.
        assert_eq!(px_to_rem(10.0), "0.625rem");
        assert_eq!(px_to_rem_base(10.0, 2.333), "4.2863rem");
    }

    #[test]
    fn test_px_to_rem_is_deterministic() {
        assert_eq!(px_to_rem(13.37), px_to_rem(13.37));
    }
}
