use rand::{rngs::ThreadRng, Rng};
use std::ops::RangeInclusive;

use crate::bank::types::{Amount, PaymentCode};

pub const PAYMENT_CODE_NUMBERS: RangeInclusive<u32> = 100_000..=999_999;
pub const AMOUNT_DOLLARS: RangeInclusive<u32> = 50..=9_999;

/// Where the screens get their made-up figures from.
pub trait DataSource {
    fn amount(&mut self) -> Amount;
    fn payment_code(&mut self) -> PaymentCode;

    fn amounts(&mut self, count: usize) -> Vec<Amount> {
        (0..count).map(|_| self.amount()).collect()
    }
}

pub struct RandomSource<R: Rng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DataSource for RandomSource<R> {
    fn amount(&mut self) -> Amount {
        Amount::new(self.rng.gen_range(AMOUNT_DOLLARS))
    }

    fn payment_code(&mut self) -> PaymentCode {
        PaymentCode::numbered(self.rng.gen_range(PAYMENT_CODE_NUMBERS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut source = RandomSource::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            assert!(AMOUNT_DOLLARS.contains(&source.amount().dollars()));

            let code = source.payment_code();
            let number: u32 = code.as_str().strip_prefix("CB-").unwrap().parse().unwrap();
            assert!(PAYMENT_CODE_NUMBERS.contains(&number));
            assert_eq!(code.as_str().len(), 9);
        }
    }

    #[test]
    fn test_same_seed_same_figures() {
        let mut a = RandomSource::with_rng(StdRng::seed_from_u64(42));
        let mut b = RandomSource::with_rng(StdRng::seed_from_u64(42));
        assert_eq!(a.amounts(5), b.amounts(5));
        assert_eq!(a.payment_code(), b.payment_code());
    }

    #[test]
    fn test_generated_codes_render_as_barcodes() {
        let mut source = RandomSource::with_rng(StdRng::seed_from_u64(1));
        for _ in 0..20 {
            let code = source.payment_code();
            assert!(!barcode_art::render(code.as_str()).is_placeholder());
        }
    }
}
