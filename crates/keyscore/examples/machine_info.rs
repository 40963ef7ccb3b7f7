//! Look up a machine profile and optionally download its logs.
//!
//! ```text
//! KEYSCORE_API_KEY=... RUST_LOG=keyscore_client=debug \
//!     cargo run -p keyscore --example machine_info -- <uuid> [file]
//! ```

use keyscore::{ClientConfig, KeyscoreClientBuilder};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(uuid) = args.next() else {
        eprintln!("usage: machine_info <uuid> [file]");
        std::process::exit(2);
    };
    let file = args.next();

    let config = ClientConfig::from_env();
    if !config.has_api_key() {
        eprintln!("warning: KEYSCORE_API_KEY is not set, requests will be unauthenticated");
    }
    let client = KeyscoreClientBuilder::from_config(config).build()?;

    let health = client.service().health().await?;
    println!("API status: {}", health.status);

    let info = client.machine().info(&uuid).await?;
    if info.is_empty() {
        println!("No profile for {uuid}");
        return Ok(());
    }

    println!("Build:      {}", info.build_id);
    println!("User:       {}@{}", info.user_name, info.computer_name);
    println!("IP:         {} ({})", info.ip, info.country);
    println!("OS:         {}", info.operating_system);
    println!("CPU:        {}", info.processor);
    println!("RAM:        {}", info.installed_ram);
    println!("GPU:        {}", info.graphics_card);
    println!("Files:      {}", info.file_tree.len());

    if let Some(file) = file {
        let download = client.machine().download_file(&uuid, &file).await?;
        let name = download
            .filename()
            .map_or_else(|| format!("{uuid}.bin"), ToString::to_string);
        let mut out = tokio::fs::File::create(&name).await?;
        let written = download.write_to(&mut out).await?;
        println!("Saved {written} bytes to {name}");
    }

    Ok(())
}
