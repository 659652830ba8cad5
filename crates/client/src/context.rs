//! Shared dependencies handed to every controller.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::notify::{Notice, Notifier};
use crate::session::SessionProvider;
use crate::transport::Transport;

/// Transport, session and notifier bundled for the controllers.
///
/// Cheap to clone; controllers each hold their own copy.
#[derive(Clone)]
pub struct ClientContext {
    pub transport: Arc<dyn Transport>,
    pub session: Arc<dyn SessionProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub page_size: u32,
}

impl ClientContext {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            page_size: masjid_core::pagination::DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a context backed by the HTTP [`ApiClient`].
    pub fn from_config(
        config: &ClientConfig,
        session: Arc<dyn SessionProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ClientError> {
        let api = ApiClient::new(&config.api_base_url, config.request_timeout())?;
        tracing::info!(base_url = %api.base_url(), "Client configured");
        Ok(Self {
            page_size: config.page_size,
            ..Self::new(Arc::new(api), session, notifier)
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = masjid_core::pagination::clamp_limit(page_size);
        self
    }

    /// The session token, required before any request is made.
    pub fn token(&self) -> Result<String, ClientError> {
        self.session.token().ok_or(ClientError::MissingToken)
    }

    /// Report a failure to the user. Inline validation errors are skipped.
    pub fn notify_error(&self, err: &ClientError) {
        if err.is_inline() {
            return;
        }
        self.notifier.notify(Notice::error(err.user_message()));
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::success(message));
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
