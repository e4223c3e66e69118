use serde::{Deserialize, Serialize};

/// A file ready to be downloaded, as returned by `getFile`.
///
/// `file_path` is valid for at least one hour; pass it to
/// [`crate::BotClient::download_file`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    /// Stable across bots and over time, but cannot be used to download the file.
    pub file_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
