pub mod source;
pub mod types;

pub use source::{DataSource, RandomSource};
pub use types::{Amount, PaymentCode};
