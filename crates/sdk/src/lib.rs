//! # PeakMojo SDK
//!
//! Thin asynchronous client for the PeakMojo REST API. Requests are described
//! by [`ApiCall`] values bound from the endpoint registry in `peakmojo-core`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use peakmojo_sdk::{ApiCall, PeakMojoClient, PeakMojoResult};
//!
//! #[tokio::main]
//! async fn main() -> PeakMojoResult<()> {
//!     let client = PeakMojoClient::builder()
//!         .base_url("https://api.staging.readymojo.com")
//!         .api_key("pm-your-api-key")
//!         .build()?;
//!
//!     let users = client.execute(&ApiCall::get("/v1/users")).await?;
//!     println!("{}", users);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{PeakMojoClient, PeakMojoClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{PeakMojoError, PeakMojoResult};

pub use peakmojo_core::{ApiCall, HttpMethod};
