//! In-memory fakes for driving session flows without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::cookies::CookieSource;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::state::session_store::SessionStore;

/// Session store backed by a shared slot; clones see the same token.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Cookie source with a fixed jar.
#[derive(Clone, Debug, Default)]
pub struct FixedCookies(pub Vec<(String, String)>);

impl FixedCookies {
    pub fn csrf(value: &str) -> Self {
        Self(vec![("csrftoken".to_owned(), value.to_owned())])
    }
}

impl CookieSource for FixedCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<String, Result<ApiResponse, ApiError>>,
    sent: Vec<(String, ApiRequest)>,
}

/// Transport answering by path from a fixed script and recording every call.
/// Unscripted paths fail with a network error.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn respond(&self, path: &str, status: u16, body: &str) -> &Self {
        self.script
            .borrow_mut()
            .routes
            .insert(path.to_owned(), Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, path: &str, error: ApiError) -> &Self {
        self.script.borrow_mut().routes.insert(path.to_owned(), Err(error));
        self
    }

    pub fn sent(&self) -> Vec<(String, ApiRequest)> {
        self.script.borrow().sent.clone()
    }

    pub fn sent_paths(&self) -> Vec<String> {
        self.script.borrow().sent.iter().map(|(_, r)| r.path.clone()).collect()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.script.borrow().sent.last().map(|(_, r)| r.clone())
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut script = self.script.borrow_mut();
        script.sent.push((url.to_owned(), request.clone()));
        script
            .routes
            .get(&request.path)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted route for {}", request.path))))
    }
}

pub type TestClient = ApiClient<ScriptedTransport, MemoryStore, FixedCookies>;

/// Client over fresh fakes; returns handles to inspect them afterwards.
pub fn test_client(token: Option<&str>) -> (TestClient, ScriptedTransport, MemoryStore) {
    let transport = ScriptedTransport::default();
    let store = token.map_or_else(MemoryStore::default, MemoryStore::with_token);
    let client = ApiClient::new(
        &ClientConfig::default(),
        transport.clone(),
        store.clone(),
        FixedCookies::csrf("CSRF123"),
    );
    (client, transport, store)
}
