pub mod route;
pub mod search;

pub use route::*;
pub use search::*;
