//! UART channel for ESP32 using esp-idf-svc

use crate::transport::Channel;
use esp_idf_svc::hal::delay::BLOCK;
use esp_idf_svc::hal::gpio::{self, InputPin, OutputPin};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartDriver};
use std::time::Duration;

pub struct UartChannel<'a> {
    uart: UartDriver<'a>,
}

impl<'a> UartChannel<'a> {
    pub fn new(
        uart: impl Peripheral<P = impl uart::Uart> + 'a,
        tx: impl Peripheral<P = impl OutputPin> + 'a,
        rx: impl Peripheral<P = impl InputPin> + 'a,
        baud_rate: u32,
    ) -> Result<Self, esp_idf_svc::sys::EspError> {
        let config = uart::config::Config::default().baudrate(baud_rate.into());
        let uart = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<gpio::Gpio0>::None,
            Option::<gpio::Gpio0>::None,
            &config,
        )?;

        std::thread::sleep(Duration::from_millis(500));
        uart.clear_rx()?;

        Ok(Self { uart })
    }
}

impl Channel for UartChannel<'_> {
    type Error = esp_idf_svc::sys::EspError;

    fn bytes_available(&mut self) -> Result<usize, Self::Error> {
        self.uart.remaining_read()
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        // Callers check bytes_available first, so this never actually blocks
        let mut byte = [0u8; 1];
        self.uart.read(&mut byte, BLOCK)?;
        Ok(byte[0])
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        self.uart.write(data)
    }
}
