use boomerang_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (media client, routes)
    let (_state, router) = boomerang_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    boomerang_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
