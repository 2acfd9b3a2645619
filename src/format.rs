use serde::{Deserialize, Serialize};

/// How monetary amounts are rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Put the symbol after the number
    pub symbol_after: bool,
}

impl CurrencyFormat {
    /// Moroccan dirham, grouped as `3.200,00 د.م.`
    pub fn mad() -> Self {
        Self {
            symbol: "د.م.".to_string(),
            group_separator: '.',
            decimal_separator: ',',
            symbol_after: true,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Format `amount` with two fraction digits.
    ///
    /// Rounding is half away from zero on the shortest decimal form of the
    /// value, so `1.005` becomes `1,01` and arbitrarily large prices keep
    /// their own digits.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return self.attach_symbol(&amount.to_string());
        }

        // f64 Display never uses an exponent
        let shortest = amount.abs().to_string();
        let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
        let (whole, cents) = round_to_cents(whole, fraction);

        let mut number = String::new();
        if amount < 0.0 && (whole.bytes().any(|b| b != b'0') || cents != "00") {
            number.push('-');
        }
        number.push_str(&group_digits(&whole, self.group_separator));
        number.push(self.decimal_separator);
        number.push_str(&cents);

        self.attach_symbol(&number)
    }

    fn attach_symbol(&self, number: &str) -> String {
        if self.symbol_after {
            format!("{} {}", number, self.symbol)
        } else {
            format!("{}{}", self.symbol, number)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::mad()
    }
}

/// Round decimal digits to two fraction digits, returning (whole, cents)
fn round_to_cents(whole: &str, fraction: &str) -> (String, String) {
    let mut digits: Vec<u8> = whole.bytes().collect();
    digits.extend(fraction.bytes().chain(std::iter::repeat(b'0')).take(2));

    if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let cents = String::from_utf8_lossy(&digits[split..]).into_owned();
    digits.truncate(split);
    (String::from_utf8_lossy(&digits).into_owned(), cents)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
