pub mod api;
mod boundary;

pub use api::Client;
