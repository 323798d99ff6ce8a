pub mod errors;
pub mod models;

pub use errors::ForgetError;
pub use models::{ Distribution, Response, Value };
