pub mod pyramid_initialize;
pub mod pyramid_take;
pub mod pyramid_fund;
pub mod pyramid_unlock;
pub mod pyramid_view;

pub use pyramid_initialize::*;
pub use pyramid_take::*;
pub use pyramid_fund::*;
pub use pyramid_unlock::*;
pub use pyramid_view::*;
