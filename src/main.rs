use formtap::config::Config;
use formtap::http::response::Response;
use formtap::http::writer::serialize_response;
use formtap::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Built once; a missing payload file aborts startup here.
    let response = Response::from_config(&cfg.response)?;
    let payload = serialize_response(&response);

    tokio::select! {
        res = server::listener::run(&cfg, payload) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
