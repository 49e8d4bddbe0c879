// #![deny(unused_crate_dependencies)]

mod console;
mod generic;

pub use console::*;
pub use generic::*;
