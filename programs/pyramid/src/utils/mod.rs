pub mod pricing;
pub mod transfers;

pub use pricing::*;
