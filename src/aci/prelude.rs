//! This module defines the generic traits that may
//! need to imported to deliver a services setup.
//!
//! ```
//! use nrf8001::aci::prelude::*;
//! ```

use crate::types::SetupMessage;

/// A trait to represent anything that can deliver setup frames
/// to the radio's command interface.
pub trait SetupSink {
    type SinkErrorType;

    /// Send a single setup `message` to the radio.
    ///
    /// Implementations shall only return `Ok` once the radio is ready to accept
    /// the next frame. [`load_setup()`](fn@crate::aci::load_setup) relies on this to
    /// keep the frames in order.
    fn send_setup(&mut self, message: &SetupMessage) -> Result<(), Self::SinkErrorType>;
}

impl<T: SetupSink + ?Sized> SetupSink for &mut T {
    type SinkErrorType = T::SinkErrorType;

    fn send_setup(&mut self, message: &SetupMessage) -> Result<(), Self::SinkErrorType> {
        (**self).send_setup(message)
    }
}

/// A trait to represent waiting for the radio's answer to a command.
///
/// The radio reports the outcome of every setup frame in a command response
/// event. Reading and decoding that event is the driver's job; this trait
/// lets [`SpiSetupSink`](struct@crate::aci::SpiSetupSink) hold off the next
/// frame until the driver has seen it.
pub trait CommandResponse {
    type ResponseErrorType;

    /// Block until the radio has answered the `message` that was just sent.
    ///
    /// Return an error if the radio rejected the frame or never answered.
    fn wait_for_response(&mut self, message: &SetupMessage)
        -> Result<(), Self::ResponseErrorType>;
}

impl<T: CommandResponse + ?Sized> CommandResponse for &mut T {
    type ResponseErrorType = T::ResponseErrorType;

    fn wait_for_response(
        &mut self,
        message: &SetupMessage,
    ) -> Result<(), Self::ResponseErrorType> {
        (**self).wait_for_response(message)
    }
}
