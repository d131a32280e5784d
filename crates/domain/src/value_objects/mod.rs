pub mod amount;
pub mod rate;

pub use amount::Amount;
pub use rate::Rate;
