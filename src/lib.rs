//! Protocol core for R200 UHF RFID reader modules.
//!
//! Frames are synchronised from the byte stream by [`FrameReceiver`], checked
//! with [`validate`] / [`Frame::is_valid`], and routed by [`Dispatcher`], which
//! tracks the UID of the tag currently in range. [`encoder`] builds outbound
//! command frames. [`R200`] ties these together over any [`Channel`].
//!
//! # Features
//!
//! - `uart-esp32` - UART channel for ESP32 using esp-idf-svc
//! - `serial` - Serial port channel for desktop using serialport crate
//!
//! # Example
//!
//! ```ignore
//! use r200_rfid::{Event, R200, ReaderConfig, SerialChannel};
//!
//! let channel = SerialChannel::new("/dev/ttyUSB0", 115200)?;
//! let mut reader = R200::with_config(channel, ReaderConfig::default());
//!
//! reader.poll()?;
//! if let Some(Event::TagDetected { uid }) = reader.process()? {
//!     println!("Found tag: {}", uid);
//! }
//! ```

mod config;
mod dispatcher;
pub mod encoder;
mod frame;
pub mod protocol;
mod reader;
mod receiver;
mod transport;
mod types;

#[cfg(feature = "uart-esp32")]
mod uart;

#[cfg(feature = "serial")]
mod serial;

// Re-exports
pub use config::ReaderConfig;
pub use dispatcher::Dispatcher;
pub use encoder::build_frame;
pub use frame::{Frame, checksum, validate};
pub use protocol::{Command, ErrorCode, FrameType, RX_BUFFER_LENGTH, UID_LENGTH};
pub use reader::R200;
pub use receiver::{FrameReceiver, flush};
pub use transport::Channel;
pub use types::{Event, PollResponse, R200Error, ReceiveError, TagState, Uid};

#[cfg(feature = "uart-esp32")]
pub use uart::UartChannel;

#[cfg(feature = "serial")]
pub use serial::SerialChannel;
