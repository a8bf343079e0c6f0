//! Authentication types.
//!
//! The server accepts HTTP Basic authentication; requests without an
//! `Authorization` header run with guest permissions.

mod credentials;

pub use credentials::Credentials;
