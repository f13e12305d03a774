use std::sync::{Arc, Mutex};

use tracing_subscriber::filter::{EnvFilter, LevelFilter, Targets};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

mod api;
mod db;
mod state;

use medsearch_backend::catalog::SqliteCatalog;
use medsearch_backend::config;
use medsearch_backend::nlp;
use medsearch_backend::processor::QUERY_LOG_TARGET;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first, the query log layer depends on it / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;

    // Append-only query log file / 查询日志文件
    let query_log_layer = match app_config.get_query_log_path() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(Targets::new().with_target(QUERY_LOG_TARGET, LevelFilter::INFO)),
            )
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "medsearch_backend=debug,query_log=info,tower_http=debug".into()
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .with(query_log_layer)
        .init();

    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Create data directory if not exists / 创建数据目录
    let data_dir = app_config.get_data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!("Created data directory: {:?}", data_dir);
    }

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| app_config.get_database_url());

    let pool = db::connect(&database_url).await?;
    let catalog = SqliteCatalog::new(pool);

    // Missing language resources keep the server up; queries answer 503 / 语言资源缺失时查询返回503
    let normalizer = nlp::build_normalizer(app_config.get_resource_dir());
    match &normalizer {
        Ok(n) => tracing::info!("Loaded {} stopwords", n.resources().stopword_count()),
        Err(e) => tracing::error!("Failed to load language resources: {}", e),
    }

    let state = Arc::new(AppState::new(
        Arc::new(catalog),
        normalizer,
        app_config.search.default_items_per_page.max(1),
    ));

    let app = api::router(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
