#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use pm_web::server::config::ServerConfig;
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;

    let conf = get_configuration(None).map_err(|e| {
        eprintln!("Failed to load Leptos configuration: {}", e);
        e
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    let config = ServerConfig::from_env().map_err(|e| {
        eprintln!("[server] {:#}", e);
        e
    })?;
    println!(
        "[server] demo gallery: {} pages x {} photos, selfie recognised after {} polls",
        config.gallery_pages, config.photos_per_page, config.selfie_pending_polls
    );

    // Demo pages first, then the compiled bundle under /pkg
    let app = pm_web::server::router(config)
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new());

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        eprintln!("Failed to bind to {}: {}", addr, e);
        e
    })?;

    println!("Listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        eprintln!("Server error: {}", e);
        e
    })?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser build has no binary; see `pm_web::start`
}
