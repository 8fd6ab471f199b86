//! Frame synchronisation on the raw byte stream

use log::{error, warn};
use std::time::{Duration, Instant};

use crate::frame::Frame;
use crate::protocol::{
    END, HEADER, MIN_FRAME_LENGTH, PARAM_LEN_LSB_POS, PARAM_LEN_MSB_POS, RX_BUFFER_LENGTH,
};
use crate::transport::Channel;
use crate::types::ReceiveError;

/// Accumulates one candidate frame at a time in a fixed buffer
#[derive(Debug)]
pub struct FrameReceiver {
    buffer: [u8; RX_BUFFER_LENGTH],
    len: usize,
}

impl Default for FrameReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReceiver {
    pub fn new() -> Self {
        Self {
            buffer: [0; RX_BUFFER_LENGTH],
            len: 0,
        }
    }

    /// Read bytes until a terminator arrives or `timeout` elapses.
    ///
    /// Once the header and parameter length are buffered, only the byte at
    /// the declared terminator position ends the frame, so 0xDD inside the
    /// parameters or checksum is stored like any other byte. Before that the
    /// first 0xDD ends the attempt. Returns as soon as the frame ends; bytes
    /// after it are left in the channel. On overflow, including a declared
    /// length that cannot fit the buffer, the channel is flushed so the next
    /// attempt starts clean.
    pub fn receive<C: Channel>(
        &mut self,
        channel: &mut C,
        timeout: Duration,
    ) -> Result<Frame<'_>, ReceiveError> {
        self.buffer = [0; RX_BUFFER_LENGTH];
        self.len = 0;

        let start = Instant::now();
        let mut terminated = false;

        while !terminated && start.elapsed() < timeout {
            while available(channel)? > 0 {
                let byte = channel.read_byte().map_err(transport_error)?;
                if self.len >= RX_BUFFER_LENGTH - 1 {
                    return Err(self.overflow(channel)?);
                }
                self.buffer[self.len] = byte;
                self.len += 1;

                match self.declared_len() {
                    Some(expected) if expected > RX_BUFFER_LENGTH - 1 => {
                        return Err(self.overflow(channel)?);
                    }
                    Some(expected) if self.len == expected => terminated = true,
                    Some(_) => {}
                    None => terminated = byte == END,
                }
                if terminated {
                    break;
                }
            }
            if !terminated {
                std::thread::sleep(Duration::from_millis(1));
            }
        }

        if !terminated {
            return Err(ReceiveError::Timeout { received: self.len });
        }

        let bytes = &self.buffer[..self.len];
        if bytes.len() < MIN_FRAME_LENGTH || bytes[0] != HEADER || bytes[bytes.len() - 1] != END {
            return Err(ReceiveError::Malformed { len: bytes.len() });
        }
        Frame::new(bytes).ok_or(ReceiveError::Malformed { len: self.len })
    }

    /// Bytes stored by the last receive attempt
    pub fn buffered(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Total frame length announced by a buffered header and length field
    fn declared_len(&self) -> Option<usize> {
        if self.len <= PARAM_LEN_LSB_POS || self.buffer[0] != HEADER {
            return None;
        }
        let param_len = u16::from_be_bytes([
            self.buffer[PARAM_LEN_MSB_POS],
            self.buffer[PARAM_LEN_LSB_POS],
        ]);
        Some(MIN_FRAME_LENGTH + param_len as usize)
    }

    fn overflow<C: Channel>(&mut self, channel: &mut C) -> Result<ReceiveError, ReceiveError> {
        let discarded = flush(channel)?;
        warn!("Max buffer length exceeded, flushed {} bytes", discarded);
        self.len = 0;
        Ok(ReceiveError::Overflow { discarded })
    }
}

/// Read and discard everything the channel has buffered
pub fn flush<C: Channel>(channel: &mut C) -> Result<usize, ReceiveError> {
    let mut discarded = 0;
    while available(channel)? > 0 {
        channel.read_byte().map_err(transport_error)?;
        discarded += 1;
    }
    Ok(discarded)
}

fn available<C: Channel>(channel: &mut C) -> Result<usize, ReceiveError> {
    channel.bytes_available().map_err(transport_error)
}

fn transport_error<E: std::fmt::Debug>(e: E) -> ReceiveError {
    error!("Read error: {:?}", e);
    ReceiveError::Transport(format!("{:?}", e))
}
