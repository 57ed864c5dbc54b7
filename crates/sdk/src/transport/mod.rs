//! Transport layer for the PeakMojo SDK.

pub mod http;

pub use http::HttpTransport;
