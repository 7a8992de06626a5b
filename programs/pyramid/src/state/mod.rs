pub mod history;
pub mod pyramid;

pub use history::*;
pub use pyramid::*;
