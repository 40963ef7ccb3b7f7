mod common;
mod count;
mod lookup;
mod machine;
mod search;
mod service;

pub use common::*;
pub use count::*;
pub use lookup::*;
pub use machine::*;
pub use search::*;
pub use service::*;
