use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use employees_api::bootstrap::app_context::{AppContext, AppServices};
use employees_api::bootstrap::config::Config;
use employees_api::infrastructure::db::repositories::employee_repository_sqlx::SqlxEmployeeRepository;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        employees_api::presentation::http::employees::list_employees,
        employees_api::presentation::http::employees::create_employee,
        employees_api::presentation::http::employees::update_employee,
        employees_api::presentation::http::employees::delete_employee,
        employees_api::presentation::http::health::health,
    ),
    components(schemas(
        employees_api::presentation::http::employees::EmployeeResponse,
        employees_api::presentation::http::employees::CreateEmployeeRequest,
        employees_api::presentation::http::employees::UpdateEmployeeRequest,
        employees_api::presentation::http::health::HealthResponse,
    )),
    tags(
        (name = "Employees", description = "Employees CRUD"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let origin = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(v)) => AllowOrigin::exact(v),
        // FRONTEND_URL is mandatory in production (enforced by Config), but
        // fall back to deny-all rather than mirroring if it is unusable.
        _ if cfg.is_production => {
            AllowOrigin::exact(HeaderValue::from_static("http://invalid"))
        }
        // Development convenience.
        _ => AllowOrigin::mirror_request(),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers([http::header::CONTENT_TYPE])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "employees_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting employees API");

    // Database
    let pool = employees_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    employees_api::infrastructure::db::migrate(&pool).await?;

    let employee_repo = Arc::new(SqlxEmployeeRepository::new(pool.clone()));
    let services = AppServices::new(employee_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .nest(
            "/api",
            employees_api::presentation::http::health::routes(pool.clone()),
        )
        .nest(
            "/api",
            employees_api::presentation::http::employees::routes(ctx),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(build_cors(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
