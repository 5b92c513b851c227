/// API сервер предобработки табличных данных

use axum::{
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber;

use tabular_prep::{
    parsing, preprocessing, stats,
    types::{
        DatasetInput, DatasetSummary, EncodeInput, EncodeOutput, ImputeInput, ParseInput,
        ScaleInput, TableOutput, UniqueInput, UniqueOutput,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/parse", post(parse))
        .route("/api/summary", post(summary))
        .route("/api/unique", post(unique))
        .route("/api/impute", post(impute))
        .route("/api/scale", post(scale))
        .route("/api/standardize", post(standardize))
        .route("/api/encode", post(encode))
        .layer(cors);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Tabular Prep API (Rust)",
        "version": "0.1.0"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn parse(Json(input): Json<ParseInput>) -> Json<TableOutput> {
    let rows = parsing::parse_table(&input.content);
    tracing::info!("Parse request: {} rows", rows.len());
    Json(TableOutput { rows })
}

async fn summary(Json(input): Json<DatasetInput>) -> Result<Json<DatasetSummary>, String> {
    tracing::info!("Summary request: {} rows", input.rows.len());

    let table = input.rows;
    let min = stats::find_min(&table).map_err(|e| format!("Summary error: {}", e))?;
    let max = stats::find_max(&table).map_err(|e| format!("Summary error: {}", e))?;
    let mean = stats::avg(&table).map_err(|e| format!("Summary error: {}", e))?;
    let variance = stats::variance(&table).map_err(|e| format!("Summary error: {}", e))?;
    let std_dev = stats::std_dev(&table).map_err(|e| format!("Summary error: {}", e))?;

    if min.is_empty() {
        return Err("Summary error: dataset has no columns".to_string());
    }

    // Последний столбец трактуется как классы решения
    let decision_classes = stats::get_unique_for_column(&table, min.len() - 1)
        .map_err(|e| format!("Summary error: {}", e))?
        .into_iter()
        .map(|code| {
            if code.fract() == 0.0 {
                if let Some(label) = parsing::decision_class_label(code as i64) {
                    return label.to_string();
                }
            }
            format!("Unknown class: {}", code)
        })
        .collect();

    Ok(Json(DatasetSummary {
        rows: table.len(),
        columns: min.len(),
        min,
        max,
        mean,
        variance,
        std_dev,
        decision_classes,
    }))
}

async fn unique(Json(input): Json<UniqueInput>) -> Result<Json<UniqueOutput>, String> {
    tracing::info!(
        "Unique request: {} rows, column {:?}",
        input.rows.len(),
        input.column
    );

    let values = match input.column {
        Some(column) => stats::get_unique_for_column(&input.rows, column)
            .map_err(|e| format!("Unique error: {}", e))?,
        None => stats::get_unique(&input.rows),
    };

    let values = values.into_vec();
    Ok(Json(UniqueOutput {
        count: values.len(),
        values,
    }))
}

async fn impute(Json(input): Json<ImputeInput>) -> Result<Json<TableOutput>, String> {
    tracing::info!(
        "Impute request: {} rows, grow_by {}",
        input.rows.len(),
        input.grow_by
    );

    let mut table = input.rows;
    if input.grow_by > 0 {
        preprocessing::grow_with_missing(&mut table, input.grow_by)
            .map_err(|e| format!("Impute error: {}", e))?;
    }
    preprocessing::fill_missing_values(&mut table).map_err(|e| format!("Impute error: {}", e))?;

    Ok(Json(TableOutput { rows: table }))
}

async fn scale(Json(input): Json<ScaleInput>) -> Result<Json<TableOutput>, String> {
    tracing::info!(
        "Scale request: {} rows into [{}, {}]",
        input.rows.len(),
        input.lower,
        input.upper
    );

    let mut table = input.rows;
    preprocessing::normalize_into_intervals(&mut table, input.lower, input.upper)
        .map_err(|e| format!("Scale error: {}", e))?;

    Ok(Json(TableOutput { rows: table }))
}

async fn standardize(Json(input): Json<DatasetInput>) -> Result<Json<TableOutput>, String> {
    tracing::info!("Standardize request: {} rows", input.rows.len());

    let mut table = input.rows;
    preprocessing::normalize(&mut table).map_err(|e| format!("Standardize error: {}", e))?;

    Ok(Json(TableOutput { rows: table }))
}

async fn encode(Json(input): Json<EncodeInput>) -> Result<Json<EncodeOutput>, String> {
    tracing::info!(
        "Encode request: {} rows, column '{}'",
        input.rows.len(),
        input.column
    );

    let mut csv = preprocessing::CsvTable {
        headers: input.headers,
        rows: input.rows,
    };
    preprocessing::one_hot_encode(&mut csv, &input.column, input.drop_first)
        .map_err(|e| format!("Encode error: {}", e))?;

    Ok(Json(EncodeOutput {
        headers: csv.headers,
        rows: csv.rows,
    }))
}
