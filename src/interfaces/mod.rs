//! Interface layer (HTTP)

pub mod http;
