use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod persistence;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
pub fn format_inr(value: f64) -> String {
    let negative = value < -0.5;
    let digits = (value.abs().round() as u64).to_string();
    let len = digits.len();

    let mut grouped = String::with_capacity(len + len / 2);
    for (index, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        let remaining = len - index - 1;
        // Comma before the final 3 digits, then every 2.
        if remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(generate_id("toast"), generate_id("toast"));
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(9_250.0), "₹9,250");
        assert_eq!(format_inr(26_200.0), "₹26,200");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
    }

    #[test]
    fn losses_carry_a_leading_sign() {
        assert_eq!(format_inr(-6_950.0), "-₹6,950");
        // Rounds toward zero rupees without a stray sign.
        assert_eq!(format_inr(-0.2), "₹0");
    }
}
