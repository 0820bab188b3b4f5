//! Transport over an `embedded-hal` SPI bus and a D/C pin
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::TransportError;

use super::{Payload, Transfer, Transport};

/// Pixels packed per bus write
const PIXEL_CHUNK: usize = 32;

#[derive(Debug)]
pub enum SpiTransportError<S, P> {
    Spi(S),
    Dc(P),
}

impl<S, P> From<SpiTransportError<S, P>> for TransportError {
    fn from(err: SpiTransportError<S, P>) -> Self {
        match err {
            SpiTransportError::Spi(_) => TransportError::Bus,
            SpiTransportError::Dc(_) => TransportError::ModeLine,
        }
    }
}

/// Drives the panel over a plain `SpiBus`. Chip select is expected to be
/// handled by the bus (or tied low), as on the WROVER-KIT.
///
/// Before each transfer the bus is flushed, so the D/C level never changes
/// while bits of the previous transfer are still being clocked out.
pub struct SpiTransport<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiTransport<SPI, DC>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn set_mode(&mut self, data: bool) -> Result<(), SpiTransportError<SPI::Error, DC::Error>> {
        self.spi.flush().map_err(SpiTransportError::Spi)?;
        let level = if data {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        };
        level.map_err(SpiTransportError::Dc)
    }

    fn write_pixels(&mut self, row: &[u16]) -> Result<(), SPI::Error> {
        let mut buffer = [0u8; PIXEL_CHUNK * 2];
        for chunk in row.chunks(PIXEL_CHUNK) {
            for (bytes, px) in buffer.chunks_exact_mut(2).zip(chunk) {
                bytes.copy_from_slice(&px.to_be_bytes());
            }
            self.spi.write(&buffer[..chunk.len() * 2])?;
        }
        Ok(())
    }
}

impl<SPI, DC> Transport for SpiTransport<SPI, DC>
where
    SPI: SpiBus<u8>,
    DC: OutputPin,
{
    type Error = SpiTransportError<SPI::Error, DC::Error>;

    fn start(&mut self, batch: &[Transfer<'_>]) -> Result<(), Self::Error> {
        for transfer in batch {
            self.set_mode(transfer.mode.dc_high())?;
            let written = match &transfer.payload {
                Payload::Command(op) => self.spi.write(&[*op]),
                Payload::Args(block) => self.spi.write(block.as_slice()),
                Payload::Pixels(source) => source
                    .rows()
                    .try_for_each(|row| self.write_pixels(row)),
            };
            written.map_err(SpiTransportError::Spi)?;
        }
        Ok(())
    }

    fn poll_complete(&mut self) -> Result<bool, Self::Error> {
        self.spi.flush().map_err(SpiTransportError::Spi)?;
        Ok(true)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.set_mode(true)?;
        self.spi.read(buf).map_err(SpiTransportError::Spi)?;
        self.spi.flush().map_err(SpiTransportError::Spi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPin, MockSpi, PinEvent};
    use crate::transport::{Mode, PixelSource};

    #[test]
    fn toggles_dc_before_each_transfer() {
        let spi = MockSpi::default();
        let dc = MockPin::default();
        let mut transport = SpiTransport::new(spi.clone(), dc.clone());
        let pixels = [0x1234u16, 0xABCD];

        let batch = [
            Transfer::command(0x2C),
            Transfer::pixels(PixelSource::Contiguous(&pixels)),
        ];
        transport.start(&batch).unwrap();
        assert!(transport.poll_complete().unwrap());

        assert_eq!(dc.events(), [PinEvent::Low, PinEvent::High]);
        assert_eq!(spi.written(), [0x2C, 0x12, 0x34, 0xAB, 0xCD]);
        assert!(!Mode::Command.dc_high());
    }

    #[test]
    fn long_rows_are_chunked_in_order() {
        let spi = MockSpi::default();
        let mut transport = SpiTransport::new(spi.clone(), MockPin::default());
        let pixels: alloc::vec::Vec<u16> = (0..100u16).collect();

        transport
            .start(&[Transfer::pixels(PixelSource::Contiguous(&pixels))])
            .unwrap();

        let written = spi.written();
        assert_eq!(written.len(), 200);
        assert_eq!(&written[196..], &[0x00, 0x62, 0x00, 0x63]);
    }

    #[test]
    fn bus_failure_maps_to_bus_error() {
        let spi = MockSpi::default();
        spi.fail_writes();
        let mut transport = SpiTransport::new(spi, MockPin::default());

        let err = transport.start(&[Transfer::command(0x01)]).unwrap_err();
        assert_eq!(TransportError::from(err), TransportError::Bus);
    }
}
