//! Basic usage: bind a registry endpoint and call it.
//!
//! ```sh
//! PEAKMOJO_API_KEY=pm-... cargo run -p peakmojo-sdk --example basic_usage -- u-123
//! ```

use peakmojo_core::endpoints;
use peakmojo_sdk::{PeakMojoClient, DEFAULT_BASE_URL};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("PEAKMOJO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = PeakMojoClient::builder()
        .base_url(base_url)
        .maybe_api_key(std::env::var("PEAKMOJO_API_KEY").ok())
        .build()?;

    // First page of users
    let users = endpoints::resolve("get_peakmojo_users")?.bind(&json!({"limit": 10}))?;
    println!("{}", client.execute(&users).await?);

    // A single user, if an id was given
    if let Some(user_id) = std::env::args().nth(1) {
        let user = endpoints::resolve("get_peakmojo_user")?.bind(&json!({"user_id": user_id}))?;
        println!("{}", client.execute(&user).await?);
    }

    Ok(())
}
