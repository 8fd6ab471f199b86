//! Wire constants and opcode tables for the R200 serial protocol

/// First byte of every frame
pub const HEADER: u8 = 0xAA;
/// Last byte of every frame
pub const END: u8 = 0xDD;

/// Capacity of the receive buffer
pub const RX_BUFFER_LENGTH: usize = 64;
/// Header, type, command, two length bytes, checksum and terminator
pub const MIN_FRAME_LENGTH: usize = 7;
/// Length of an EPC-96 tag identifier
pub const UID_LENGTH: usize = 12;

// Fixed frame offsets
pub(crate) const TYPE_POS: usize = 1;
pub(crate) const COMMAND_POS: usize = 2;
pub(crate) const PARAM_LEN_MSB_POS: usize = 3;
pub(crate) const PARAM_LEN_LSB_POS: usize = 4;
pub(crate) const PARAM_POS: usize = 5;

/// Continuous polling parameter block for the multiple poll command
pub(crate) const MULTI_POLL_RESERVED: u8 = 0x22;

macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A code this crate does not know about
            Unknown(u8),
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $value,)+
                    $name::Unknown(other) => other,
                }
            }
        }
    };
}

byte_enum! {
    /// Frame type byte (offset 1)
    FrameType {
        Command = 0x00,
        Response = 0x01,
        Notification = 0x02,
    }
}

byte_enum! {
    /// Command opcode (offset 2)
    Command {
        GetModuleInfo = 0x03,
        SetWorkArea = 0x07,
        GetSelectParameter = 0x0B,
        SetSelectParameter = 0x0C,
        GetQueryParameters = 0x0D,
        SetQueryParameters = 0x0E,
        SetSendSelectInstruction = 0x12,
        ModuleSleep = 0x17,
        ControlIoPort = 0x1A,
        SetModuleIdleSleepTime = 0x1D,
        SinglePollInstruction = 0x22,
        MultiplePollInstruction = 0x27,
        StopMultiplePoll = 0x28,
        ReadLabel = 0x39,
        WriteLabel = 0x49,
        KillTag = 0x65,
        LockLabel = 0x82,
        GetWorkingChannel = 0xAA,
        SetWorkingChannel = 0xAB,
        SetAutoFrequencyHopping = 0xAD,
        SetTransmitContinuousCarrier = 0xB0,
        SetTransmitPower = 0xB6,
        AcquireTransmitPower = 0xB7,
        SetReceiverDemodulatorParameters = 0xF0,
        GetReceiverDemodulatorParameters = 0xF1,
        TestRfInputBlockingSignal = 0xF2,
        TestChannelRssi = 0xF3,
        /// Module-reported failure, error code in the first parameter byte
        ExecutionFailure = 0xFF,
    }
}

byte_enum! {
    /// Error code carried by an [`Command::ExecutionFailure`] frame
    ErrorCode {
        ReadFail = 0x09,
        WriteFail = 0x10,
        KillFail = 0x12,
        LockFail = 0x13,
        /// No tag answered the inventory round
        InventoryFail = 0x15,
        AccessFail = 0x16,
        /// The module could not parse the last command
        CommandError = 0x17,
        FhssFail = 0x20,
    }
}
