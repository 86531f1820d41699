//! File and message transfer bindings.
//!
//! Sends go to the group owner (or an explicit address) and return the native
//! future. Receives wait for the native layer to deliver one payload.

use tracing::debug;
use wifi_p2p_core::completion::{self, Pending};
use wifi_p2p_core::types::{
    FileTransfer, MessageTransfer, ReceiveFileRequest, ReceiveMessageOptions, ReceivedMessage,
};
use wifi_p2p_core::NativeFuture;

use crate::WifiP2pBridge;

impl WifiP2pBridge {
    pub fn send_file(&self, path: impl Into<String>) -> NativeFuture<FileTransfer> {
        let path = path.into();
        debug!(path = %path, "Sending file to group owner");
        self.native.send_file(path)
    }

    pub fn send_file_to(
        &self,
        path: impl Into<String>,
        address: impl Into<String>,
    ) -> NativeFuture<FileTransfer> {
        let (path, address) = (path.into(), address.into());
        debug!(path = %path, address = %address, "Sending file");
        self.native.send_file_to(path, address)
    }

    /// Wait for one incoming file; resolves with the path it was written to.
    pub fn receive_file(&self, request: ReceiveFileRequest) -> Pending<String> {
        let (callback, pending) = completion::channel("receive_file");
        debug!(
            destination = %request.destination(),
            scan_gallery = request.force_to_scan_gallery,
            "Waiting for file"
        );
        self.native.receive_file(
            request.folder,
            request.file_name,
            request.force_to_scan_gallery,
            callback,
        );
        pending
    }

    pub fn send_message(&self, message: impl Into<String>) -> NativeFuture<MessageTransfer> {
        let message = message.into();
        debug!(bytes = message.len(), "Sending message to group owner");
        self.native.send_message(message)
    }

    pub fn send_message_to(
        &self,
        message: impl Into<String>,
        address: impl Into<String>,
    ) -> NativeFuture<MessageTransfer> {
        let (message, address) = (message.into(), address.into());
        debug!(bytes = message.len(), address = %address, "Sending message");
        self.native.send_message_to(message, address)
    }

    /// Wait for one incoming message.
    pub fn receive_message(&self, options: ReceiveMessageOptions) -> Pending<ReceivedMessage> {
        let (callback, pending) = completion::channel("receive_message");
        debug!(meta = options.meta, "Waiting for message");
        self.native.receive_message(options, callback);
        pending
    }

    pub fn stop_receiving_message(&self) -> NativeFuture<()> {
        self.native.stop_receiving_message()
    }
}
