mod forward;
pub use forward::*;

mod inverse;
pub use inverse::*;
