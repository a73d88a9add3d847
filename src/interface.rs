//! Bus interface implementation for the ADXL362
//!
//! This module implements the `device-driver` register interface on top of
//! the ADXL362's command-based SPI protocol. Every transaction is one frame:
//! chip select asserted, a one-byte command (0x0B read, 0x0A write), the
//! register address, then the data bytes, chip select de-asserted. The device
//! auto-increments the register address for multi-byte transfers, which the
//! driver relies on for X/Y/Z burst reads.

use device_driver::RegisterInterface;

/// SPI command byte for register reads
pub const CMD_READ: u8 = 0x0B;

/// SPI command byte for register writes
pub const CMD_WRITE: u8 = 0x0A;

/// Largest write frame: command + address + data
const MAX_WRITE_FRAME: usize = 2 + 4;

/// SPI interface for the ADXL362
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which
/// manages the chip select pin and guarantees exclusive ownership of the bus
/// for the duration of each transaction. No command frame can be interrupted
/// by another bus user.
///
/// If using `embedded-hal-bus`, you would typically create an `SpiDevice`
/// like:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// The ADXL362 clocks data MSB-first in SPI mode 0 at up to 8 MHz.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len()

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[CMD_READ, address]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len()

        // Single frame: command, address, data
        let mut buffer = [0u8; MAX_WRITE_FRAME];
        buffer[0] = CMD_WRITE;
        buffer[1] = address;
        let len = write_data.len().min(MAX_WRITE_FRAME - 2);
        buffer[2..2 + len].copy_from_slice(&write_data[..len]);

        self.spi.write(&buffer[..2 + len])
    }
}
