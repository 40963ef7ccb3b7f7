//! API endpoint modules.

mod count;
mod lookup;
mod machine;
mod search;
mod service;

pub use count::CountApi;
pub use lookup::LookupApi;
pub use machine::MachineApi;
pub use search::{SearchApi, SearchRequestBuilder};
pub use service::ServiceApi;
