mod error;
mod fixture;
mod remote;
mod types;

pub use error::FetchError;
pub use fixture::FixtureSource;
pub use remote::RemoteSource;
pub use types::{Observer, Request};

/// Where raw satellite payloads come from.
pub trait DataSource {
    fn fetch(&self, request: &Request) -> Result<Vec<u8>, FetchError>;
}
