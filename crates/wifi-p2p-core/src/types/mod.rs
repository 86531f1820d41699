//! Payload types exchanged with the native layer. camelCase on the wire.

pub mod connection;
pub mod device;
pub mod service;
pub mod transfer;

pub use connection::{ConnectConfig, ConnectionInfo, GroupInfo, GroupOwnerAddress};
pub use device::{Device, DeviceList, DeviceStatus};
pub use service::{DnsSdService, DnsTxtRecord, ServiceRecord};
pub use transfer::{
    FileTransfer, MessageTransfer, ReceiveFileRequest, ReceiveMessageOptions, ReceivedMessage,
};
