pub mod errors;
pub mod query;
pub mod route;

pub use errors::*;
pub use query::*;
pub use route::*;
