use log::{debug, error, warn};

use crate::config::ReaderConfig;
use crate::dispatcher::Dispatcher;
use crate::encoder;
use crate::receiver::{self, FrameReceiver};
use crate::transport::Channel;
use crate::types::{Event, R200Error, TagState, Uid, bytes_to_hex};

pub struct R200<C: Channel> {
    channel: C,
    receiver: FrameReceiver,
    dispatcher: Dispatcher,
    config: ReaderConfig,
}

impl<C: Channel> R200<C> {
    /// Create a new reader instance with the given channel and default settings
    pub fn new(channel: C) -> Self {
        Self::with_config(channel, ReaderConfig::default())
    }

    pub fn with_config(channel: C, config: ReaderConfig) -> Self {
        Self {
            channel,
            receiver: FrameReceiver::new(),
            dispatcher: Dispatcher::new(config.verbose_diagnostics),
            config,
        }
    }

    /// Whether the module has sent anything not yet processed
    pub fn data_available(&mut self) -> Result<bool, R200Error> {
        self.channel
            .bytes_available()
            .map(|n| n > 0)
            .map_err(|e| R200Error::Transport(format!("{:?}", e)))
    }

    /// Receive, validate and dispatch one frame if data is waiting.
    ///
    /// Returns `Ok(None)` when nothing was waiting or the frame changed
    /// nothing. Receive and checksum failures leave the tag state untouched.
    pub fn process(&mut self) -> Result<Option<Event>, R200Error> {
        if !self.data_available()? {
            return Ok(None);
        }

        let frame = self
            .receiver
            .receive(&mut self.channel, self.config.receive_timeout)?;

        if self.config.verbose_diagnostics {
            debug!("Received {} bytes: {:02X?}", frame.as_bytes().len(), frame.as_bytes());
            debug!(
                "Calculated checksum: {:02X?} Received checksum: {:02X?}",
                frame.computed_checksum(),
                frame.checksum()
            );
        }

        if !frame.is_valid() {
            warn!("Dropping invalid frame: {}", bytes_to_hex(frame.as_bytes()));
            return Err(R200Error::ChecksumMismatch);
        }

        Ok(self.dispatcher.dispatch(&frame))
    }

    /// Request a single inventory round; the answer arrives via [`Self::process`]
    pub fn poll(&mut self) -> Result<(), R200Error> {
        self.send(&encoder::single_poll())
    }

    /// Start continuous polling, or stop it
    pub fn set_multiple_polling_mode(&mut self, enable: bool) -> Result<(), R200Error> {
        if enable {
            self.send(&encoder::start_multi_poll())
        } else {
            self.send(&encoder::stop_multi_poll())
        }
    }

    /// Ask the module for its hardware version; the answer arrives as [`Event::ModuleInfo`]
    pub fn request_module_info(&mut self) -> Result<(), R200Error> {
        self.send(&encoder::module_info_query())
    }

    /// Write an encoded frame to the channel verbatim.
    ///
    /// A write that accepts fewer bytes than the frame is a transport error.
    pub fn send(&mut self, frame: &[u8]) -> Result<(), R200Error> {
        if self.config.verbose_diagnostics {
            debug!("Sending command: {:02X?}", frame);
        }
        let written = self.channel.write_bytes(frame).map_err(|e| {
            error!("Write error: {:?}", e);
            R200Error::Transport(format!("{:?}", e))
        })?;
        if written != frame.len() {
            warn!("Short write: {} of {} bytes", written, frame.len());
            return Err(R200Error::Transport(format!(
                "Short write: {} of {} bytes",
                written,
                frame.len()
            )));
        }
        Ok(())
    }

    /// Discard everything the channel has buffered, returning the byte count
    pub fn flush(&mut self) -> Result<usize, R200Error> {
        Ok(receiver::flush(&mut self.channel)?)
    }

    /// UID of the tag in range, blank when there is none
    pub fn uid(&self) -> Uid {
        self.dispatcher.uid()
    }

    pub fn tag_state(&self) -> &TagState {
        self.dispatcher.state()
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    pub fn into_inner(self) -> C {
        self.channel
    }
}
