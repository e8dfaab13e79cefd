use std::fmt;

pub const PAYMENT_CODE_PREFIX: &str = "CB-";

/// Reference shown on the cash to bitcoin screen and fed to the barcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentCode(String);
impl PaymentCode {
    /// `CB-` followed by `number`, e.g. `CB-482193`.
    pub fn numbered(number: u32) -> Self {
        Self(format!("{}{}", PAYMENT_CODE_PREFIX, number))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl AsRef<str> for PaymentCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl fmt::Display for PaymentCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whole dollars, displayed as `$1,234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u32);
impl Amount {
    pub fn new(dollars: u32) -> Self {
        Self(dollars)
    }
    pub fn dollars(self) -> u32 {
        self.0
    }
}
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new(50).to_string(), "$50");
        assert_eq!(Amount::new(999).to_string(), "$999");
        assert_eq!(Amount::new(1000).to_string(), "$1,000");
        assert_eq!(Amount::new(9999).to_string(), "$9,999");
        assert_eq!(Amount::new(1234567).to_string(), "$1,234,567");
        assert_eq!(Amount::new(0).to_string(), "$0");
    }

    #[test]
    fn test_payment_code() {
        let code = PaymentCode::numbered(482193);
        assert_eq!(code.as_str(), "CB-482193");
        assert_eq!(code.to_string(), "CB-482193");
        assert_eq!(PaymentCode::numbered(100000).as_ref(), "CB-100000");
    }
}
