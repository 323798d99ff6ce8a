pub mod client;
pub mod core;
pub mod transport;

pub use crate::core::{
    errors::ForgetError,
    models::{
        Distribution,
        Response,
        Value,
    },
};
pub use client::Client;
pub use transport::{
    HttpTransport,
    MockTransport,
    Transport,
    TransportResponse,
};
