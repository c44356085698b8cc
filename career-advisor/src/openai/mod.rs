mod boundary;

pub use boundary::Client;
