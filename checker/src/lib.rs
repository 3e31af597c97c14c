//! Host side of the client: runs requests built by `api-core` over HTTP and
//! drives batches of calls against the service.
//!
//! # Design
//! - `Transport` is the only seam that performs I/O. `UreqTransport` is the
//!   production implementation; any `Fn(&HttpRequest) -> Result<..>` is one
//!   too, which is how tests stay off the network.
//! - `HttpClient` never fails in evaluated mode.
//! - `ApiChecker` requires equal-length inputs and reports in input order.

pub mod checker;
pub mod client;
pub mod config;
pub mod error;
pub mod suite;
pub mod transport;

pub use checker::ApiChecker;
pub use client::HttpClient;
pub use config::CheckerConfig;
pub use error::{CheckError, TransportError};
pub use transport::{Transport, UreqTransport};
