//! API client for the chat backend

use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::types::{ApiError, QueryRequest, QueryResponse};

const QUERY_PATH: &str = "/api/query";

/// POST a JSON body and decode the JSON reply
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let req = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| AppError::Decode(format!("Failed to serialize request: {}", e)))?;

    let resp = req
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let message = resp.json::<ApiError>().await.ok().map(|err| err.error);
        return Err(AppError::server(status, message));
    }

    resp.json::<R>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Ask the backend a question in the context of the previous exchanges
pub async fn ask(
    config: &AppConfig,
    chat_history: Vec<(String, String)>,
    question: &str,
) -> Result<String> {
    let url = config.endpoint(QUERY_PATH);
    let body = QueryRequest {
        chat_history,
        question: question.to_string(),
    };

    tracing::debug!(url = %url, history = body.chat_history.len(), "sending query");
    let resp: QueryResponse = post_json(&url, &body).await?;
    Ok(resp.answer)
}
