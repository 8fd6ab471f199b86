//! Types for RFID operations

use std::fmt;

use thiserror::Error;

use crate::protocol::{ErrorCode, UID_LENGTH};

/// EPC of a tag as reported by a poll response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uid([u8; UID_LENGTH]);

impl Uid {
    /// All-zero UID, meaning "no tag present"
    pub const BLANK: Uid = Uid([0; UID_LENGTH]);

    pub const fn new(bytes: [u8; UID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build a UID from exactly [`UID_LENGTH`] bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; UID_LENGTH]>::try_from(bytes).ok().map(Self)
    }

    pub fn is_blank(&self) -> bool {
        self.0 == [0; UID_LENGTH]
    }

    pub fn as_bytes(&self) -> &[u8; UID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", bytes_to_hex(&self.0))
    }
}

/// Tag currently tracked by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagState {
    #[default]
    Absent,
    Present(Uid),
}

impl TagState {
    /// The held UID, or [`Uid::BLANK`] when no tag is present
    pub fn uid(&self) -> Uid {
        match self {
            TagState::Absent => Uid::BLANK,
            TagState::Present(uid) => *uid,
        }
    }
}

/// Parameter block of a single or multiple poll response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResponse {
    pub rssi: u8,
    /// Protocol control word
    pub pc: u16,
    pub epc: Uid,
}

/// Outcome of dispatching a valid frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A tag different from the held one was read
    TagDetected { uid: Uid },
    /// The held tag was read again
    TagStillPresent { uid: Uid },
    /// An inventory round found nothing while a tag was held
    TagRemoved { uid: Uid },
    /// Text returned by a module info query
    ModuleInfo { text: String },
    /// The module rejected the last command
    ProtocolError,
    /// Any other execution failure reported by the module
    ModuleError { code: ErrorCode },
    /// A frame with a command this crate does not handle
    UnknownCommand { code: u8 },
}

/// Reasons a receive attempt produced no frame
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiveError {
    /// No terminator arrived before the timeout
    #[error("no frame terminator within timeout ({received} bytes buffered)")]
    Timeout { received: usize },

    /// The frame did not fit in the receive buffer
    #[error("receive buffer overflow, {discarded} unread bytes flushed")]
    Overflow { discarded: usize },

    /// A terminator arrived but the bytes before it are not a frame
    #[error("malformed frame of {len} bytes")]
    Malformed { len: usize },

    /// Transport layer error (UART, serial, etc.)
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors that can occur during RFID operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum R200Error {
    /// Transport layer error (UART, serial, etc.)
    #[error("transport error: {0}")]
    Transport(String),

    /// No frame could be read from the channel
    #[error(transparent)]
    Receive(#[from] ReceiveError),

    /// A complete frame failed header, terminator or checksum validation
    #[error("frame failed checksum validation")]
    ChecksumMismatch,

    /// Invalid parameter passed to a function
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convert bytes to uppercase hex string
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
