//! Typed view over a received frame and checksum validation
//!
//! ```text
//! | 0      | 1    | 2       | 3..=4         | 5..5+len | 5+len    | 6+len |
//! | header | type | command | param len (BE)| params   | checksum | end   |
//! ```

use crate::protocol::{
    Command, ErrorCode, FrameType, COMMAND_POS, END, HEADER, MIN_FRAME_LENGTH,
    PARAM_LEN_LSB_POS, PARAM_LEN_MSB_POS, PARAM_POS, TYPE_POS, UID_LENGTH,
};
use crate::types::{PollResponse, Uid};

/// RSSI(1) + PC(2) + EPC(12)
const POLL_PARAMS_MIN: usize = 3 + UID_LENGTH;

/// A frame of at least [`MIN_FRAME_LENGTH`] bytes.
///
/// Fixed-position fields (header through parameter length) are always
/// readable. Everything located via the parameter length is returned as an
/// `Option`, since a corrupt length can point past the received bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Wrap `bytes`, or `None` if they are too short to hold a frame
    pub fn new(bytes: &'a [u8]) -> Option<Self> {
        if bytes.len() < MIN_FRAME_LENGTH {
            return None;
        }
        Some(Self { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn header(&self) -> u8 {
        self.bytes[0]
    }

    pub fn frame_type(&self) -> FrameType {
        FrameType::from(self.bytes[TYPE_POS])
    }

    pub fn command(&self) -> Command {
        Command::from(self.bytes[COMMAND_POS])
    }

    /// Declared parameter length (big endian)
    pub fn param_len(&self) -> usize {
        u16::from_be_bytes([self.bytes[PARAM_LEN_MSB_POS], self.bytes[PARAM_LEN_LSB_POS]]) as usize
    }

    pub fn params(&self) -> Option<&'a [u8]> {
        self.bytes.get(PARAM_POS..PARAM_POS + self.param_len())
    }

    /// Checksum byte as received
    pub fn checksum(&self) -> Option<u8> {
        self.bytes.get(PARAM_POS + self.param_len()).copied()
    }

    pub fn terminator(&self) -> Option<u8> {
        self.bytes.get(PARAM_POS + self.param_len() + 1).copied()
    }

    /// Checksum recomputed over type, command, length and parameters
    pub fn computed_checksum(&self) -> Option<u8> {
        self.bytes
            .get(TYPE_POS..PARAM_POS + self.param_len())
            .map(checksum)
    }

    pub fn is_valid(&self) -> bool {
        self.header() == HEADER
            && self.terminator() == Some(END)
            && self.computed_checksum().is_some()
            && self.computed_checksum() == self.checksum()
    }

    /// RSSI, PC and EPC of a poll response
    pub fn poll_response(&self) -> Option<PollResponse> {
        let params = self.params()?;
        if params.len() < POLL_PARAMS_MIN {
            return None;
        }
        Some(PollResponse {
            rssi: params[0],
            pc: u16::from_be_bytes([params[1], params[2]]),
            epc: Uid::from_slice(&params[3..POLL_PARAMS_MIN])?,
        })
    }

    /// Error code of an execution failure frame
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.params()?.first().copied().map(ErrorCode::from)
    }

    /// Text of a module info response.
    ///
    /// The first parameter byte is the info type; the text runs to the end of
    /// the parameters or the first terminator byte, whichever comes first.
    pub fn module_info(&self) -> Option<String> {
        let text = self.params()?.get(1..)?;
        let end = text.iter().position(|&b| b == END).unwrap_or(text.len());
        Some(String::from_utf8_lossy(&text[..end]).into_owned())
    }
}

/// 8-bit truncated sum of `bytes`
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Check header, terminator and checksum of a raw frame.
///
/// Never panics: a length field pointing past `bytes` makes the frame invalid.
pub fn validate(bytes: &[u8]) -> bool {
    Frame::new(bytes).is_some_and(|frame| frame.is_valid())
}
