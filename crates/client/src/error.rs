use masjid_core::error::CoreError;
use masjid_core::validation::FieldErrors;

/// Errors surfaced by the client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No bearer token in the session; the request was never sent.
    #[error("No authentication token in session")]
    MissingToken,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered 2xx but with `success: false`.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation failed; nothing was sent.
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// The operation needs a saved entity but the draft has no id.
    #[error("Entity has no id")]
    MissingId,

    #[error(transparent)]
    Core(CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Invalid(errors) => ClientError::Invalid(errors),
            other => ClientError::Core(other),
        }
    }
}

impl ClientError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::MissingToken => "Sesi berakhir, silakan login kembali".to_string(),
            ClientError::Request(err) if err.is_timeout() => {
                "Server tidak merespons, coba lagi nanti".to_string()
            }
            ClientError::Request(_) => "Gagal terhubung ke server".to_string(),
            ClientError::Api { status: 401, .. } => {
                "Sesi berakhir, silakan login kembali".to_string()
            }
            ClientError::Api { status: 403, .. } => {
                "Anda tidak memiliki akses untuk tindakan ini".to_string()
            }
            ClientError::Api { message, .. } | ClientError::Rejected(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            ClientError::Api { status, .. } => format!("Terjadi kesalahan pada server ({status})"),
            ClientError::Rejected(_) => "Permintaan ditolak server".to_string(),
            ClientError::Decode(_) => "Respons server tidak dikenali".to_string(),
            ClientError::Invalid(_) => "Periksa kembali isian formulir".to_string(),
            ClientError::MissingId => "Data belum tersimpan".to_string(),
            ClientError::Core(CoreError::Validation(message)) => message.clone(),
            ClientError::Core(_) => "Tindakan tidak dapat dilakukan saat ini".to_string(),
            ClientError::Io(_) => "Gagal membaca berkas lokal".to_string(),
        }
    }

    /// Client-side validation failures are shown inline, not as a toast.
    pub fn is_inline(&self) -> bool {
        matches!(self, ClientError::Invalid(_))
    }
}
