//! Fetch-backed Task Store
//!
//! JSON over `window.fetch`. No retry, no timeout.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::TaskStore;
use crate::config::AppConfig;
use crate::error::{ApiResult, RequestError};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    config: AppConfig,
}

impl HttpTaskStore {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Send a request and fail on any non-2xx status
    async fn send(&self, method: &'static str, url: &str, body: Option<String>) -> ApiResult<Response> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(RequestError::from_js)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(RequestError::from_js)?;
        }

        let window = web_sys::window().ok_or_else(|| RequestError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(RequestError::from_js)?;
        let response: Response = value.dyn_into().map_err(RequestError::from_js)?;

        log::debug!("{} {} -> {}", method, url, response.status());
        if !response.ok() {
            return Err(RequestError::Status {
                method,
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let promise = response.json().map_err(|e| RequestError::Decode(format!("{:?}", e)))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| RequestError::Decode(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

fn encode<T: Serialize>(body: &T) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let response = self.send("GET", self.config.collection_url(), None).await?;
        Self::read_json(response).await
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        let body = encode(task)?;
        let response = self.send("POST", self.config.collection_url(), Some(body)).await?;
        Self::read_json(response).await
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<()> {
        let body = encode(patch)?;
        self.send("PATCH", &self.config.item_url(id), Some(body)).await?;
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> ApiResult<()> {
        self.send("DELETE", &self.config.item_url(id), None).await?;
        Ok(())
    }
}
