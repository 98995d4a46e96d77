//! Async round-trips between items, the API, and the store.
//!
//! # Design
//! [`Transport`] is the only I/O seam: it turns an `HttpRequest` into an
//! `HttpResponse` and reports non-2xx statuses as data, not errors.
//! [`SyncAdapter`] runs one request per action with no retry, de-duplication
//! or cancellation. Concurrent dispatches reconcile in the order their
//! responses arrive, so the last response wins.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::action::{ItemAction, Outcome};
use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::item::TodoItem;
use crate::store::TodoStore;
use crate::types::Todo;

/// Executes plain-data HTTP requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `ureq` transport run on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout())
            .build()
            .new_agent();
        Self { agent }
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request)).await?
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let HttpRequest {
        method,
        path,
        headers,
        body,
    } = request;

    let mut response = match (method, body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&path), &headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&path), &headers).call(),
        (HttpMethod::Put, Some(body)) => with_headers(agent.put(&path), &headers).send(body.as_bytes()),
        (HttpMethod::Put, None) => with_headers(agent.put(&path), &headers).send_empty(),
    }?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse { status, headers, body })
}

/// Sends item actions and reconciles the store with what the server confirms.
#[derive(Debug)]
pub struct SyncAdapter<T, S> {
    client: TodoClient,
    transport: T,
    store: S,
}

impl<S: TodoStore> SyncAdapter<UreqTransport, S> {
    pub fn from_config(config: &ClientConfig, store: S) -> Self {
        Self::new(TodoClient::new(&config.base_url), UreqTransport::new(config), store)
    }
}

impl<T: Transport, S: TodoStore> SyncAdapter<T, S> {
    pub fn new(client: TodoClient, transport: T, store: S) -> Self {
        Self {
            client,
            transport,
            store,
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One request, then reconcile on success. On failure the store is
    /// untouched and the error is returned.
    #[instrument(skip(self), fields(id = action.id()))]
    pub async fn dispatch(&self, action: &ItemAction) -> Result<Outcome, ApiError> {
        let request = action.request(&self.client)?;
        debug!(method = request.method.as_str(), path = %request.path, "sending");
        let response = self.transport.execute(request).await?;
        let outcome = action.complete(&self.client, response)?;
        outcome.apply_to(&self.store);
        Ok(outcome)
    }

    /// Fetch the full list from the server.
    pub async fn load(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.transport.execute(self.client.build_list_todos()).await?;
        let todos = self.client.parse_list_todos(response)?;
        debug!(len = todos.len(), "list loaded");
        Ok(todos)
    }

    /// Edit/save button. `Ok(None)` when the press only entered edit mode.
    pub async fn press_edit(&self, item: &mut TodoItem) -> Result<Option<Outcome>, ApiError> {
        let Some(action) = item.press_edit() else {
            return Ok(None);
        };
        let outcome = self.dispatch(&action).await?;
        item.apply(&outcome);
        Ok(Some(outcome))
    }

    pub async fn toggle_completion(&self, item: &mut TodoItem) -> Result<Outcome, ApiError> {
        let outcome = self.dispatch(&item.toggle_completion()).await?;
        item.apply(&outcome);
        Ok(outcome)
    }

    pub async fn press_delete(&self, item: &mut TodoItem) -> Result<Outcome, ApiError> {
        let outcome = self.dispatch(&item.press_delete()).await?;
        item.apply(&outcome);
        Ok(outcome)
    }
}
