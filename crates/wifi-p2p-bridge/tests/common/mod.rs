//! Scripted native module shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use wifi_p2p_bridge::types::*;
use wifi_p2p_bridge::{BridgeError, EventChannel, EventEmitter, EventPayload, WifiP2pBridge};
use wifi_p2p_core::completion::{Completion, ReasonCallback};
use wifi_p2p_core::constants::NATIVE_MODULE_NAME;
use wifi_p2p_core::{NativeFuture, WifiP2pNative};

/// A native call as the scripted module saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init,
    DiscoverPeers,
    StopPeerDiscovery,
    ConnectWithConfig(ConnectConfig),
    CancelConnect,
    CreateGroup,
    RemoveGroup,
    ReceiveFile {
        folder: String,
        file_name: String,
        force_to_scan_gallery: bool,
    },
    ReceiveMessage(ReceiveMessageOptions),
    GetAvailablePeersList,
    SendFile(String),
    SendFileTo(String, String),
    SendMessage(String),
    SendMessageTo(String, String),
    StopReceivingMessage,
    GetConnectionInfo,
    GetGroupInfo,
    GetPeerList,
    DiscoverService,
    StartServiceRegistration(ServiceRecord),
}

/// How callback actions answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// Keep the callback; the test fires it with `take_reason_callback()`.
    Hold,
    Succeed,
    Fail(i32),
    /// Fire the callback twice (a misbehaving native layer).
    Twice(Option<i32>, Option<i32>),
    /// Drop the callback without firing it.
    Lose,
}

pub struct ScriptedNative {
    calls: Mutex<Vec<Call>>,
    reply: Mutex<Reply>,
    reason_callbacks: Mutex<VecDeque<ReasonCallback>>,
    file_callbacks: Mutex<VecDeque<Completion<String>>>,
    message_callbacks: Mutex<VecDeque<Completion<ReceivedMessage>>>,
    emitter: Option<EventEmitter>,
    name: Option<String>,
    pub peers: Mutex<DeviceList>,
    pub connection_info: Mutex<ConnectionInfo>,
    pub group: Mutex<Option<GroupInfo>>,
    pub reject_transfers: Mutex<bool>,
}

impl ScriptedNative {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(Some(EventEmitter::new())))
    }

    /// A module that exposes no event source.
    pub fn without_events() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    /// A module that reports its own registration name.
    pub fn named(name: &str) -> Arc<Self> {
        let mut native = Self::build(Some(EventEmitter::new()));
        native.name = Some(name.to_string());
        Arc::new(native)
    }

    fn build(emitter: Option<EventEmitter>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Hold),
            reason_callbacks: Mutex::new(VecDeque::new()),
            file_callbacks: Mutex::new(VecDeque::new()),
            message_callbacks: Mutex::new(VecDeque::new()),
            emitter,
            name: None,
            peers: Mutex::new(DeviceList::default()),
            connection_info: Mutex::new(ConnectionInfo::default()),
            group: Mutex::new(None),
            reject_transfers: Mutex::new(false),
        }
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take_reason_callback(&self) -> ReasonCallback {
        self.reason_callbacks
            .lock()
            .unwrap()
            .pop_front()
            .expect("no pending reason callback")
    }

    pub fn take_file_callback(&self) -> Completion<String> {
        self.file_callbacks
            .lock()
            .unwrap()
            .pop_front()
            .expect("no pending receive_file callback")
    }

    pub fn take_message_callback(&self) -> Completion<ReceivedMessage> {
        self.message_callbacks
            .lock()
            .unwrap()
            .pop_front()
            .expect("no pending receive_message callback")
    }

    /// Fire a native event on `channel`.
    pub fn fire(&self, channel: EventChannel, payload: &EventPayload) -> usize {
        self.emitter
            .as_ref()
            .expect("module has no event source")
            .emit_channel(channel, payload)
    }

    pub fn emitter(&self) -> EventEmitter {
        self.emitter.clone().expect("module has no event source")
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer(&self, callback: ReasonCallback) {
        let reply = *self.reply.lock().unwrap();
        match reply {
            Reply::Hold => self.reason_callbacks.lock().unwrap().push_back(callback),
            Reply::Succeed => {
                callback.complete(None);
            }
            Reply::Fail(code) => {
                callback.complete(Some(code));
            }
            Reply::Twice(first, second) => {
                callback.complete(first);
                callback.complete(second);
            }
            Reply::Lose => drop(callback),
        }
    }

    fn transfer<T: Send + 'static>(&self, value: T) -> NativeFuture<T> {
        let reject = *self.reject_transfers.lock().unwrap();
        Box::pin(async move {
            if reject {
                Err(BridgeError::rejected("1", "Connection refused"))
            } else {
                Ok(value)
            }
        })
    }
}

impl WifiP2pNative for ScriptedNative {
    fn module_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NATIVE_MODULE_NAME)
    }

    fn event_source(&self) -> Option<EventEmitter> {
        self.emitter.clone()
    }

    fn init(&self) -> NativeFuture<bool> {
        self.record(Call::Init);
        Box::pin(async { Ok(true) })
    }

    fn discover_peers(&self, callback: ReasonCallback) {
        self.record(Call::DiscoverPeers);
        self.answer(callback);
    }

    fn stop_peer_discovery(&self, callback: ReasonCallback) {
        self.record(Call::StopPeerDiscovery);
        self.answer(callback);
    }

    fn connect_with_config(&self, config: ConnectConfig, callback: ReasonCallback) {
        self.record(Call::ConnectWithConfig(config));
        self.answer(callback);
    }

    fn cancel_connect(&self, callback: ReasonCallback) {
        self.record(Call::CancelConnect);
        self.answer(callback);
    }

    fn create_group(&self, callback: ReasonCallback) {
        self.record(Call::CreateGroup);
        self.answer(callback);
    }

    fn remove_group(&self, callback: ReasonCallback) {
        self.record(Call::RemoveGroup);
        self.answer(callback);
    }

    fn receive_file(
        &self,
        folder: String,
        file_name: String,
        force_to_scan_gallery: bool,
        callback: Completion<String>,
    ) {
        self.record(Call::ReceiveFile {
            folder,
            file_name,
            force_to_scan_gallery,
        });
        self.file_callbacks.lock().unwrap().push_back(callback);
    }

    fn receive_message(&self, options: ReceiveMessageOptions, callback: Completion<ReceivedMessage>) {
        self.record(Call::ReceiveMessage(options));
        self.message_callbacks.lock().unwrap().push_back(callback);
    }

    fn get_available_peers_list(&self) -> NativeFuture<DeviceList> {
        self.record(Call::GetAvailablePeersList);
        let peers = self.peers.lock().unwrap().clone();
        Box::pin(async move { Ok(peers) })
    }

    fn send_file(&self, path: String) -> NativeFuture<FileTransfer> {
        self.record(Call::SendFile(path.clone()));
        self.transfer(FileTransfer { time: 12, file: path })
    }

    fn send_file_to(&self, path: String, address: String) -> NativeFuture<FileTransfer> {
        self.record(Call::SendFileTo(path.clone(), address));
        self.transfer(FileTransfer { time: 15, file: path })
    }

    fn send_message(&self, message: String) -> NativeFuture<MessageTransfer> {
        self.record(Call::SendMessage(message.clone()));
        self.transfer(MessageTransfer { time: 3, message })
    }

    fn send_message_to(&self, message: String, address: String) -> NativeFuture<MessageTransfer> {
        self.record(Call::SendMessageTo(message.clone(), address));
        self.transfer(MessageTransfer { time: 4, message })
    }

    fn stop_receiving_message(&self) -> NativeFuture<()> {
        self.record(Call::StopReceivingMessage);
        Box::pin(async { Ok(()) })
    }

    fn get_connection_info(&self) -> NativeFuture<ConnectionInfo> {
        self.record(Call::GetConnectionInfo);
        let info = self.connection_info.lock().unwrap().clone();
        Box::pin(async move { Ok(info) })
    }

    fn get_group_info(&self) -> NativeFuture<Option<GroupInfo>> {
        self.record(Call::GetGroupInfo);
        let group = self.group.lock().unwrap().clone();
        Box::pin(async move { Ok(group) })
    }

    fn get_peer_list(&self) -> NativeFuture<Option<Vec<Device>>> {
        self.record(Call::GetPeerList);
        let devices = self.peers.lock().unwrap().devices.clone();
        Box::pin(async move { Ok(Some(devices)) })
    }

    fn discover_service(&self) -> NativeFuture<()> {
        self.record(Call::DiscoverService);
        Box::pin(async { Ok(()) })
    }

    fn start_service_registration(&self, record: ServiceRecord) -> NativeFuture<bool> {
        self.record(Call::StartServiceRegistration(record));
        Box::pin(async { Ok(true) })
    }
}

pub fn bridge_with(native: &Arc<ScriptedNative>) -> WifiP2pBridge {
    WifiP2pBridge::new(Arc::clone(native) as Arc<dyn WifiP2pNative>)
}

pub fn device(name: &str, address: &str) -> Device {
    Device {
        device_name: name.to_string(),
        device_address: address.to_string(),
        status: 3,
        ..Default::default()
    }
}
