use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todolist_server::Config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todolist_server=info,warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, dev_mode = config.dev_mode, "listening");
    todolist_server::run(listener, config).await
}
