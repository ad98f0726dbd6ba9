//! Synchronous SparkPost transmission transport for outbound email.
//! Hosts build an `email::Email`, hand it to a `SparkPostTransport`,
//! and provider-reported failures come back as structured `ApiError`s.

pub mod config;
pub mod email;
pub mod errors;
pub mod mime;
pub mod sparkpost;

mod transport;

pub use errors::{ApiError, Error};
pub use transport::{SparkPostTransport, Transport};
