#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use masjid_client::error::ClientError;
use masjid_client::notify::{Notice, NoticeLevel, NoticeQueue};
use masjid_client::session::{MemorySession, SessionData};
use masjid_client::transport::{ApiRequest, Transport, UploadRequest};
use masjid_client::ClientContext;

type Handler = dyn Fn(&ApiRequest) -> Result<Value, ClientError> + Send + Sync;

/// In-memory transport: answers every request with `handler` and records
/// what was sent.
pub struct FakeTransport {
    handler: Box<Handler>,
    requests: Mutex<Vec<ApiRequest>>,
    uploads: Mutex<Vec<UploadRequest>>,
}

impl FakeTransport {
    pub fn new(
        handler: impl Fn(&ApiRequest) -> Result<Value, ClientError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// `page` query parameter of every GET, in order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests()
            .iter()
            .filter_map(|r| r.query_value("page"))
            .map(|p| p.parse().unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(&request)
    }

    async fn upload(&self, request: UploadRequest) -> Result<Value, ClientError> {
        self.uploads.lock().unwrap().push(request);
        Ok(json!({
            "success": true,
            "data": {
                "id": "f-1",
                "name": "poster.png",
                "mimeType": "image/png",
                "webContentLink": "https://files.example/f-1"
            }
        }))
    }
}

pub struct Harness {
    pub transport: Arc<FakeTransport>,
    pub notices: Arc<NoticeQueue>,
    pub session: Arc<MemorySession>,
    pub ctx: ClientContext,
}

impl Harness {
    pub fn errors(&self) -> Vec<Notice> {
        self.notices
            .drain()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .collect()
    }
}

/// Signed-in context for masjid 1 backed by `transport`.
pub fn harness(transport: Arc<FakeTransport>) -> Harness {
    let session = Arc::new(MemorySession::new(SessionData {
        token: Some("test-token".to_string()),
        user: None,
        current_masjid_id: Some(1),
    }));
    harness_with_session(transport, session)
}

pub fn harness_with_session(
    transport: Arc<FakeTransport>,
    session: Arc<MemorySession>,
) -> Harness {
    let notices = Arc::new(NoticeQueue::new());
    let ctx = ClientContext::new(transport.clone(), session.clone(), notices.clone());
    Harness {
        transport,
        notices,
        session,
        ctx,
    }
}

pub fn stakeholder_json(id: i64) -> Value {
    json!({
        "id": id,
        "nama_stakeholder": format!("Stakeholder {id}"),
        "jenis": "individu",
        "telepon": "081234567890",
        "email": format!("s{id}@masjid.id"),
        "masjid_id": 1
    })
}

/// A list body in the stakeholders endpoint's shape.
pub fn stakeholder_page(ids: impl IntoIterator<Item = i64>, total: u64) -> Value {
    let rows: Vec<Value> = ids.into_iter().map(stakeholder_json).collect();
    json!({
        "success": true,
        "stakeholders": rows,
        "pagination": { "totalItems": total }
    })
}
