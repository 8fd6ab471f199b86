//! Outbound command frames

use crate::frame::checksum;
use crate::protocol::{Command, FrameType, END, HEADER, MULTI_POLL_RESERVED};
use crate::types::R200Error;

/// Encode a command frame for `command` with `params`
pub fn build_frame(command: Command, params: &[u8]) -> Result<Vec<u8>, R200Error> {
    if params.len() > u16::MAX as usize {
        return Err(R200Error::InvalidParameter(format!(
            "Parameter block too long: {} bytes (maximum: {} bytes)",
            params.len(),
            u16::MAX
        )));
    }
    Ok(encode(FrameType::Command, command, params))
}

/// Get module info (hardware version)
pub fn module_info_query() -> Vec<u8> {
    encode(FrameType::Command, Command::GetModuleInfo, &[0x00])
}

/// Single inventory round
pub fn single_poll() -> Vec<u8> {
    encode(FrameType::Command, Command::SinglePollInstruction, &[])
}

/// Continuous polling (0xFFFF rounds) until [`stop_multi_poll`]
pub fn start_multi_poll() -> Vec<u8> {
    encode(
        FrameType::Command,
        Command::MultiplePollInstruction,
        &[MULTI_POLL_RESERVED, 0xFF, 0xFF],
    )
}

/// Poll for a fixed number of inventory rounds
pub fn multi_poll(rounds: u16) -> Result<Vec<u8>, R200Error> {
    if rounds == 0 {
        return Err(R200Error::InvalidParameter("Poll rounds must be at least 1".into()));
    }
    let [msb, lsb] = rounds.to_be_bytes();
    Ok(encode(
        FrameType::Command,
        Command::MultiplePollInstruction,
        &[MULTI_POLL_RESERVED, msb, lsb],
    ))
}

pub fn stop_multi_poll() -> Vec<u8> {
    encode(FrameType::Command, Command::StopMultiplePoll, &[])
}

/// Callers guarantee `params.len() <= u16::MAX`
pub(crate) fn encode(frame_type: FrameType, command: Command, params: &[u8]) -> Vec<u8> {
    let [msb, lsb] = (params.len() as u16).to_be_bytes();

    let mut frame = Vec::with_capacity(params.len() + 7);
    frame.extend_from_slice(&[HEADER, frame_type.into(), command.into(), msb, lsb]);
    frame.extend_from_slice(params);
    let sum = checksum(&frame[1..]);
    frame.push(sum);
    frame.push(END);
    frame
}
