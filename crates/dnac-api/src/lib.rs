// dnac-api: Async Rust client for the Cisco DNA Center intent API

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod pools;
pub mod sites;
pub mod transport;

pub use client::{DeleteResponse, DnacClient};
pub use error::Error;
pub use models::{GlobalPoolRecord, SiteRecord, SubPoolRecord};
pub use transport::{TlsMode, TransportConfig};
