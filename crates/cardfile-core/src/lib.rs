mod display;
mod filter;

pub use display::*;
pub use filter::*;
