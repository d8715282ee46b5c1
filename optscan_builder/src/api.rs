mod core;
mod parsed;
mod spec;

pub use self::core::*;
pub use parsed::*;
pub use spec::*;
