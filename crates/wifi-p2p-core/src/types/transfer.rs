use serde::{Deserialize, Serialize};

/// Where an incoming file is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveFileRequest {
    pub folder: String,
    pub file_name: String,
    /// Ask the platform media scanner to index the file once written.
    #[serde(default)]
    pub force_to_scan_gallery: bool,
}

impl ReceiveFileRequest {
    pub fn new(folder: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
            force_to_scan_gallery: false,
        }
    }

    pub fn scan_gallery(mut self, force: bool) -> Self {
        self.force_to_scan_gallery = force;
        self
    }

    /// Destination path. The folder is expected to carry its trailing separator.
    pub fn destination(&self) -> String {
        format!("{}{}", self.folder, self.file_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveMessageOptions {
    /// Deliver the sender address together with the message.
    #[serde(default)]
    pub meta: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
}

/// Result of a completed file send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTransfer {
    /// Transfer duration in milliseconds.
    pub time: u64,
    pub file: String,
}

/// Result of a completed message send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTransfer {
    pub time: u64,
    pub message: String,
}
