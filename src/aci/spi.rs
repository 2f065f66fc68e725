use embedded_hal::spi::SpiDevice;

use super::{
    prelude::{CommandResponse, SetupSink},
    AciError,
};
use crate::types::{SetupMessage, MAX_FRAME_LENGTH};

/// A [`SetupSink`] that clocks each frame onto an SPI bus and then waits
/// for the radio's answer.
///
/// Every frame goes out as a single SPI transaction, so the radio's chip select
/// shall be handled by the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
/// passed to [`SpiSetupSink::new()`]. After each frame the `response` object
/// (see [`CommandResponse`]) is asked to wait for the radio's command response;
/// [`SetupSink::send_setup()`] only returns `Ok` once it has.
///
/// The bytes clocked back during the latest frame are kept and can be
/// inspected with [`SpiSetupSink::response()`].
pub struct SpiSetupSink<SPI, RSP> {
    _spi: SPI,
    _response: RSP,
    _buf: [u8; MAX_FRAME_LENGTH],
    _len: usize,
}

impl<SPI, RSP> SpiSetupSink<SPI, RSP>
where
    SPI: SpiDevice,
    RSP: CommandResponse,
{
    pub fn new(spi: SPI, response: RSP) -> SpiSetupSink<SPI, RSP> {
        SpiSetupSink {
            _spi: spi,
            _response: response,
            _buf: [0u8; MAX_FRAME_LENGTH],
            _len: 0,
        }
    }

    /// The bytes received while the latest frame was sent.
    pub fn response(&self) -> &[u8] {
        &self._buf[..self._len]
    }

    /// Give back the underlying SPI device and response object.
    pub fn release(self) -> (SPI, RSP) {
        (self._spi, self._response)
    }

    /// Clock a single frame onto the bus without waiting for an answer.
    ///
    /// Use [`SetupSink::send_setup()`] (or [`load_setup()`](fn@crate::aci::load_setup))
    /// to send a setup sequence.
    pub fn write_frame(
        &mut self,
        message: &SetupMessage,
    ) -> Result<(), AciError<SPI::Error, RSP::ResponseErrorType>> {
        let frame = message.frame();
        self._buf[..frame.len()].copy_from_slice(frame);
        self.spi_transfer(frame.len())
    }

    fn spi_transfer(
        &mut self,
        len: usize,
    ) -> Result<(), AciError<SPI::Error, RSP::ResponseErrorType>> {
        self._len = 0;
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(AciError::Spi)?;
        self._len = len;
        Ok(())
    }
}

impl<SPI, RSP> SetupSink for SpiSetupSink<SPI, RSP>
where
    SPI: SpiDevice,
    RSP: CommandResponse,
{
    type SinkErrorType = AciError<SPI::Error, RSP::ResponseErrorType>;

    fn send_setup(&mut self, message: &SetupMessage) -> Result<(), Self::SinkErrorType> {
        self.write_frame(message)?;
        self._response
            .wait_for_response(message)
            .map_err(AciError::Response)
    }
}
