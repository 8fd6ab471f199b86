//! Routes valid frames and tracks the tag in range

use log::{debug, warn};

use crate::frame::Frame;
use crate::protocol::{Command, ErrorCode};
use crate::types::{Event, TagState, Uid};

#[derive(Debug, Default)]
pub struct Dispatcher {
    state: TagState,
    verbose: bool,
}

impl Dispatcher {
    pub fn new(verbose_diagnostics: bool) -> Self {
        Self {
            state: TagState::Absent,
            verbose: verbose_diagnostics,
        }
    }

    /// Handle a frame that already passed validation.
    ///
    /// Returns `None` when the frame changes nothing worth reporting, e.g. a
    /// repeated inventory failure with no tag held.
    pub fn dispatch(&mut self, frame: &Frame<'_>) -> Option<Event> {
        match frame.command() {
            Command::GetModuleInfo => match frame.module_info() {
                Some(text) => Some(Event::ModuleInfo { text }),
                None => {
                    warn!("Module info response without parameters");
                    None
                }
            },
            Command::SinglePollInstruction | Command::MultiplePollInstruction => {
                self.handle_poll(frame)
            }
            Command::ExecutionFailure => self.handle_failure(frame),
            other => {
                let code = u8::from(other);
                if self.verbose {
                    debug!("Unknown command: 0x{:02X}", code);
                }
                Some(Event::UnknownCommand { code })
            }
        }
    }

    /// The held UID, blank when no tag is present
    pub fn uid(&self) -> Uid {
        self.state.uid()
    }

    pub fn state(&self) -> &TagState {
        &self.state
    }

    /// Forget the held tag without reporting a removal
    pub fn reset(&mut self) {
        self.state = TagState::Absent;
    }

    fn handle_poll(&mut self, frame: &Frame<'_>) -> Option<Event> {
        let Some(response) = frame.poll_response() else {
            warn!(
                "Poll response too short for an EPC: {} parameter bytes",
                frame.param_len()
            );
            return None;
        };

        if self.verbose {
            debug!("RSSI: 0x{:02X}", response.rssi);
            debug!("PC: 0x{:04X}", response.pc);
            debug!("EPC: {}", response.epc);
        }

        let uid = response.epc;
        if uid.is_blank() {
            warn!("Ignoring poll response with blank EPC");
            return None;
        }

        if self.state == TagState::Present(uid) {
            if self.verbose {
                debug!("Same card still present: {}", uid);
            }
            Some(Event::TagStillPresent { uid })
        } else {
            if self.verbose {
                debug!("New card detected: {}", uid);
            }
            self.state = TagState::Present(uid);
            Some(Event::TagDetected { uid })
        }
    }

    fn handle_failure(&mut self, frame: &Frame<'_>) -> Option<Event> {
        let Some(code) = frame.error_code() else {
            warn!("Execution failure without an error code");
            return None;
        };

        match code {
            // Not really a failure: the inventory round found no tag
            ErrorCode::InventoryFail => match self.state {
                TagState::Present(uid) => {
                    if self.verbose {
                        debug!("Card removed: {}", uid);
                    }
                    self.state = TagState::Absent;
                    Some(Event::TagRemoved { uid })
                }
                TagState::Absent => None,
            },
            ErrorCode::CommandError => {
                warn!("Module reported command error");
                Some(Event::ProtocolError)
            }
            code => {
                if self.verbose {
                    debug!("Fail code 0x{:02X}", u8::from(code));
                }
                Some(Event::ModuleError { code })
            }
        }
    }
}
