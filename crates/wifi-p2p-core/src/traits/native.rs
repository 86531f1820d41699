//! `WifiP2pNative` trait: the platform WiFi-Direct module the bridge fronts.
//!
//! Two call shapes:
//! - callback actions take a [`Completion`] and report through it exactly once
//!   (`None` for success or a reason code, or a delivered payload);
//! - query/transfer calls return a [`NativeFuture`] that the bridge hands back
//!   to the caller untouched.
//!
//! Implementations own delivery guarantees. Dropping a completion without
//! firing it settles the caller's future with `CompletionDropped`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::completion::{Completion, ReasonCallback};
use crate::constants::NATIVE_MODULE_NAME;
use crate::errors::BridgeResult;
use crate::events::EventEmitter;
use crate::types::{
    ConnectConfig, ConnectionInfo, Device, DeviceList, FileTransfer, GroupInfo, MessageTransfer,
    ReceiveMessageOptions, ReceivedMessage, ServiceRecord,
};

/// Future returned by the native layer for non-callback operations.
pub type NativeFuture<T> = Pin<Box<dyn Future<Output = BridgeResult<T>> + Send + 'static>>;

/// The native WiFi-Direct collaborator.
pub trait WifiP2pNative: Send + Sync {
    fn module_name(&self) -> &str {
        NATIVE_MODULE_NAME
    }

    /// The shared emitter this module fires events into, if it has one.
    fn event_source(&self) -> Option<EventEmitter>;

    // ── Lifecycle ──

    fn init(&self) -> NativeFuture<bool>;

    // ── Callback actions ──

    fn discover_peers(&self, callback: ReasonCallback);

    fn stop_peer_discovery(&self, callback: ReasonCallback);

    fn connect_with_config(&self, config: ConnectConfig, callback: ReasonCallback);

    fn cancel_connect(&self, callback: ReasonCallback);

    fn create_group(&self, callback: ReasonCallback);

    fn remove_group(&self, callback: ReasonCallback);

    /// Delivers the path of the written file.
    fn receive_file(
        &self,
        folder: String,
        file_name: String,
        force_to_scan_gallery: bool,
        callback: Completion<String>,
    );

    fn receive_message(&self, options: ReceiveMessageOptions, callback: Completion<ReceivedMessage>);

    // ── Future-returning calls ──

    fn get_available_peers_list(&self) -> NativeFuture<DeviceList>;

    fn send_file(&self, path: String) -> NativeFuture<FileTransfer>;

    fn send_file_to(&self, path: String, address: String) -> NativeFuture<FileTransfer>;

    fn send_message(&self, message: String) -> NativeFuture<MessageTransfer>;

    fn send_message_to(&self, message: String, address: String) -> NativeFuture<MessageTransfer>;

    fn stop_receiving_message(&self) -> NativeFuture<()>;

    fn get_connection_info(&self) -> NativeFuture<ConnectionInfo>;

    /// `None` when no group exists.
    fn get_group_info(&self) -> NativeFuture<Option<GroupInfo>>;

    /// `None` when the platform returned no device list.
    fn get_peer_list(&self) -> NativeFuture<Option<Vec<Device>>>;

    fn discover_service(&self) -> NativeFuture<()>;

    fn start_service_registration(&self, record: ServiceRecord) -> NativeFuture<bool>;
}

// ── Arc<T> blanket impl ──

impl<T: WifiP2pNative + ?Sized> WifiP2pNative for Arc<T> {
    fn module_name(&self) -> &str {
        (**self).module_name()
    }
    fn event_source(&self) -> Option<EventEmitter> {
        (**self).event_source()
    }
    fn init(&self) -> NativeFuture<bool> {
        (**self).init()
    }
    fn discover_peers(&self, callback: ReasonCallback) {
        (**self).discover_peers(callback)
    }
    fn stop_peer_discovery(&self, callback: ReasonCallback) {
        (**self).stop_peer_discovery(callback)
    }
    fn connect_with_config(&self, config: ConnectConfig, callback: ReasonCallback) {
        (**self).connect_with_config(config, callback)
    }
    fn cancel_connect(&self, callback: ReasonCallback) {
        (**self).cancel_connect(callback)
    }
    fn create_group(&self, callback: ReasonCallback) {
        (**self).create_group(callback)
    }
    fn remove_group(&self, callback: ReasonCallback) {
        (**self).remove_group(callback)
    }
    fn receive_file(
        &self,
        folder: String,
        file_name: String,
        force_to_scan_gallery: bool,
        callback: Completion<String>,
    ) {
        (**self).receive_file(folder, file_name, force_to_scan_gallery, callback)
    }
    fn receive_message(&self, options: ReceiveMessageOptions, callback: Completion<ReceivedMessage>) {
        (**self).receive_message(options, callback)
    }
    fn get_available_peers_list(&self) -> NativeFuture<DeviceList> {
        (**self).get_available_peers_list()
    }
    fn send_file(&self, path: String) -> NativeFuture<FileTransfer> {
        (**self).send_file(path)
    }
    fn send_file_to(&self, path: String, address: String) -> NativeFuture<FileTransfer> {
        (**self).send_file_to(path, address)
    }
    fn send_message(&self, message: String) -> NativeFuture<MessageTransfer> {
        (**self).send_message(message)
    }
    fn send_message_to(&self, message: String, address: String) -> NativeFuture<MessageTransfer> {
        (**self).send_message_to(message, address)
    }
    fn stop_receiving_message(&self) -> NativeFuture<()> {
        (**self).stop_receiving_message()
    }
    fn get_connection_info(&self) -> NativeFuture<ConnectionInfo> {
        (**self).get_connection_info()
    }
    fn get_group_info(&self) -> NativeFuture<Option<GroupInfo>> {
        (**self).get_group_info()
    }
    fn get_peer_list(&self) -> NativeFuture<Option<Vec<Device>>> {
        (**self).get_peer_list()
    }
    fn discover_service(&self) -> NativeFuture<()> {
        (**self).discover_service()
    }
    fn start_service_registration(&self, record: ServiceRecord) -> NativeFuture<bool> {
        (**self).start_service_registration(record)
    }
}
