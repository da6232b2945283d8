#[tokio::main]
async fn main() -> anyhow::Result<()> {
    priceboard_observability::init();

    let app = priceboard_api::app::build_app()?;

    let addr = std::env::var("PRICEBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
