/// Byte channel to an R200 module.
/// Implement this trait for different transports (UART, serial port, etc.)
pub trait Channel {
    /// Error type for transport operations
    type Error: std::fmt::Debug;

    /// Number of received bytes that can be read without blocking
    fn bytes_available(&mut self) -> Result<usize, Self::Error>;

    /// Read a single byte. Only called when `bytes_available` reported data.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Write data to the transport
    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, Self::Error>;
}
