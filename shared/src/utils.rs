// Display and input helpers shared by the engine and the command line front end.

/// On-screen money formatting. Never used for exported or stored figures.
pub mod currency_format {
    /// Renders `amount` as US dollars, e.g. `1234.5` -> `"$1,234.50"`,
    /// `-20` -> `"-$20.00"`.
    pub fn format_currency(amount: f64) -> String {
        if !amount.is_finite() {
            return format!("${}", amount);
        }
        let cents = round_to_cents(amount.abs());
        let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{}${}.{}", sign, group_thousands(whole), fraction)
    }

    // Rounds the shortest decimal text of `value` (what `Display` prints), not
    // its binary value, so `1.005` shows as `1.01`. Half a cent rounds up;
    // `value` is non-negative here.
    fn round_to_cents(value: f64) -> String {
        let text = value.to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let cents = fraction.bytes().chain(b"00".iter().copied()).take(2);
        let mut digits: Vec<u8> = whole.bytes().chain(cents).collect();
        if fraction.as_bytes().get(2).map_or(false, |d| *d >= b'5') {
            carry_one(&mut digits);
        }
        let (whole, cents) = digits.split_at(digits.len() - 2);
        format!("{}.{}", String::from_utf8_lossy(whole), String::from_utf8_lossy(cents))
    }

    // Adds one unit in the last place of an ASCII digit string.
    fn carry_one(digits: &mut Vec<u8>) {
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                return;
            }
        }
        digits.insert(0, b'1');
    }

    fn group_thousands(digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }

}

/// Coercion of free-form numeric input, done by the front end before rows
/// reach the calculator.
pub mod number_input {
    /// Parses `text` as a number; anything unparsable or non-finite becomes 0.
    pub fn number_or_zero(text: &str) -> f64 {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

}
