//! Remote Task Client
//!
//! Frontend bindings to the hosted todo API. Four operations against a
//! fixed base URL; every failure is normalized into an [`ApiError`]
//! variant and nothing is thrown past this boundary.
//!
//! Request URLs and payloads are built by plain functions so they can be
//! unit-tested on the host; the actual fetch calls only exist on the
//! wasm32 target.

use crate::error::ApiError;
use crate::models::{NewTask, Task};

#[cfg(target_arch = "wasm32")]
use crate::models::TaskListResponse;

/// Fixed base URL of the hosted todo service.
pub const BASE_URL: &str = "https://api.freeapi.app/api/v1/todos";

/// Description attached to every task created from this UI.
pub const DEFAULT_DESCRIPTION: &str = "Task created via Todo App";

fn list_url() -> String {
    BASE_URL.to_string()
}

fn create_url() -> String {
    format!("{BASE_URL}/")
}

fn delete_url(id: &str) -> String {
    format!("{BASE_URL}/{id}")
}

fn toggle_url(id: &str) -> String {
    format!("{BASE_URL}/toggle/status/{id}")
}

/// Build the JSON payload for a create request.
fn create_payload(title: &str) -> NewTask<'_> {
    NewTask {
        title,
        description: DEFAULT_DESCRIPTION,
    }
}

/// Render a non-2xx response as a human-readable cause.
fn http_failure(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status} {status_text}")
    }
}

#[cfg(target_arch = "wasm32")]
fn log_failure(error: &ApiError) {
    web_sys::console::error_1(&error.to_string().into());
}

/// `GET {BASE_URL}` — fetch the full task list.
pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get(&list_url())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::FetchFailed(e.to_string()))?;
        if !response.ok() {
            let error =
                ApiError::FetchFailed(http_failure(response.status(), &response.status_text()));
            log_failure(&error);
            return Err(error);
        }
        let body: TaskListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::FetchFailed(e.to_string()))?;
        Ok(body.data)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds exist only for unit tests; no network.
        let _ = list_url();
        Ok(Vec::new())
    }
}

/// `POST {BASE_URL}/` — create a task with the given title.
pub async fn create_task(title: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::post(&create_url())
            .header("accept", "application/json")
            .json(&create_payload(title))
            .map_err(|e| ApiError::CreateFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::CreateFailed(e.to_string()))?;
        if !response.ok() {
            let error =
                ApiError::CreateFailed(http_failure(response.status(), &response.status_text()));
            log_failure(&error);
            return Err(error);
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (create_url(), create_payload(title));
        Ok(())
    }
}

/// `DELETE {BASE_URL}/{id}` — delete the task with the given id.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::delete(&delete_url(id))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::DeleteFailed(e.to_string()))?;
        if !response.ok() {
            let error =
                ApiError::DeleteFailed(http_failure(response.status(), &response.status_text()));
            log_failure(&error);
            return Err(error);
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = delete_url(id);
        Ok(())
    }
}

/// `PATCH {BASE_URL}/toggle/status/{id}` — toggle completion of the task
/// with the given id. The new `complete` value is learned from the next
/// list fetch, never inferred locally.
pub async fn toggle_task(id: &str) -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::patch(&toggle_url(id))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::ToggleFailed(e.to_string()))?;
        if !response.ok() {
            let error =
                ApiError::ToggleFailed(http_failure(response.status(), &response.status_text()));
            log_failure(&error);
            return Err(error);
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = toggle_url(id);
        Ok(())
    }
}
