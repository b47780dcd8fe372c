use super::*;

const FEED_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

pub(crate) fn router(config: &Config) -> Router {
  Router::new()
    .route("/health", get(health))
    .route(&format!("/{}", config.rss_path), get(feed_file))
    .with_state(Arc::new(config.feed_path()))
}

pub(crate) async fn serve(listener: TcpListener, config: &Config) -> Result {
  axum::serve(listener, router(config))
    .await
    .context("feed server stopped")
}

async fn feed_file(State(path): State<Arc<PathBuf>>) -> Response {
  match tokio::fs::read(path.as_path()).await {
    Ok(bytes) => {
      ([(header::CONTENT_TYPE, FEED_CONTENT_TYPE)], bytes).into_response()
    }
    Err(error) if error.kind() == io::ErrorKind::NotFound => {
      StatusCode::NOT_FOUND.into_response()
    }
    Err(error) => {
      error!(path = %path.display(), %error, "failed to read feed file");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}

async fn health() -> &'static str {
  "ok"
}
