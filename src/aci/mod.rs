//! A module to encapsulate the delivery of a services setup to the radio.
pub mod prelude;

mod spi;
pub use spi::SpiSetupSink;

use core::fmt::{self, Display, Formatter};

use crate::types::SetupMessage;
use prelude::SetupSink;

#[cfg(feature = "std")]
extern crate std;

/// A collection of error types to describe failures while talking to the radio's
/// command interface (ACI).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AciError<SPI, RSP> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// The radio rejected a command or did not answer it.
    /// See [`CommandResponse`](trait@crate::aci::prelude::CommandResponse).
    Response(RSP),
}

/// The reasons [`load_setup()`] can stop before the whole setup was sent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetupError<E> {
    /// The frame at `index` has an embedded length that does not fit a frame.
    /// Nothing was sent for it.
    Malformed { index: usize },
    /// The sink failed to deliver the frame at `index`.
    Transport { index: usize, error: E },
}

impl<SPI, RSP> Display for AciError<SPI, RSP> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AciError::Spi(_) => write!(f, "SPI transaction failed"),
            AciError::Response(_) => write!(f, "no valid command response"),
        }
    }
}

impl<E> Display for SetupError<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SetupError::Malformed { index } => write!(f, "setup frame {index} is malformed"),
            SetupError::Transport { index, .. } => write!(f, "failed to send setup frame {index}"),
        }
    }
}

#[cfg(feature = "std")]
impl<SPI: fmt::Debug, RSP: fmt::Debug> std::error::Error for AciError<SPI, RSP> {}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for SetupError<E> {}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<E> defmt::Format for SetupError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SetupError::Malformed { index } => defmt::write!(fmt, "malformed frame {}", index),
            SetupError::Transport { index, .. } => {
                defmt::write!(fmt, "failed to send frame {}", index)
            }
        }
    }
}

/// Send every frame of `messages` to `sink`, in order.
///
/// Returns the number of frames sent. The first failure stops the sequence;
/// the frames after it are not sent because each one writes on top of the
/// radio state left by the ones before it.
///
/// ```ignore
/// // `events` implements `CommandResponse` by reading the radio's event queue
/// let mut sink = SpiSetupSink::new(spi, &mut events);
/// load_setup(&mut sink, BROADCAST.messages)?;
/// ```
pub fn load_setup<S: SetupSink>(
    mut sink: S,
    messages: &[SetupMessage],
) -> Result<usize, SetupError<S::SinkErrorType>> {
    for (index, message) in messages.iter().enumerate() {
        if !message.is_well_formed() {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            defmt::warn!("setup frame {} is malformed", index);
            return Err(SetupError::Malformed { index });
        }
        #[cfg(all(feature = "defmt", target_os = "none"))]
        defmt::trace!("sending {} ({}/{})", message, index + 1, messages.len());
        sink.send_setup(message)
            .map_err(|error| SetupError::Transport { index, error })?;
    }
    #[cfg(all(feature = "defmt", target_os = "none"))]
    defmt::debug!("setup complete: {} frames", messages.len());
    Ok(messages.len())
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{load_setup, prelude::SetupSink, AciError, SetupError, SpiSetupSink};
    use crate::{
        services::broadcast::BROADCAST,
        spi_test_expects,
        test::{Answered, BrokenBus, Silent},
        types::SetupMessage,
    };
    use embedded_hal::spi::ErrorKind;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use std::{string::ToString, vec::Vec};

    /// Records every frame and fails on the frame at `fail_at` (if any).
    struct RecordingSink {
        sent: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    impl SetupSink for RecordingSink {
        type SinkErrorType = u8;

        fn send_setup(&mut self, message: &SetupMessage) -> Result<(), Self::SinkErrorType> {
            if self.fail_at == Some(self.sent.len()) {
                return Err(0xEE);
            }
            self.sent.push(message.frame().to_vec());
            Ok(())
        }
    }

    #[test]
    fn sends_all_in_order() {
        let mut sink = RecordingSink {
            sent: Vec::new(),
            fail_at: None,
        };
        assert_eq!(load_setup(&mut sink, BROADCAST.messages), Ok(13));
        assert_eq!(sink.sent.len(), 13);
        for (sent, msg) in sink.sent.iter().zip(BROADCAST.messages) {
            assert_eq!(sent.as_slice(), msg.frame());
        }
    }

    #[test]
    fn stops_at_first_failure() {
        let mut sink = RecordingSink {
            sent: Vec::new(),
            fail_at: Some(5),
        };
        assert_eq!(
            load_setup(&mut sink, BROADCAST.messages),
            Err(SetupError::Transport {
                index: 5,
                error: 0xEE
            })
        );
        assert_eq!(sink.sent.len(), 5);
    }

    #[test]
    fn malformed_frame_is_not_sent() {
        let messages = [
            SetupMessage::new(0, &[0x01, 0x06]),
            SetupMessage::new(0, &[0x00]),
            SetupMessage::new(0, &[0x01, 0x06]),
        ];
        let mut sink = RecordingSink {
            sent: Vec::new(),
            fail_at: None,
        };
        assert_eq!(
            load_setup(&mut sink, &messages),
            Err(SetupError::Malformed { index: 1 })
        );
        assert_eq!(sink.sent.len(), 1);
    }

    #[test]
    fn error_messages() {
        let err: SetupError<u8> = SetupError::Transport { index: 3, error: 1 };
        assert_eq!(err.to_string(), "failed to send setup frame 3");
        let err: SetupError<u8> = SetupError::Malformed { index: 0 };
        assert_eq!(err.to_string(), "setup frame 0 is malformed");
    }

    #[test]
    fn empty_sequence() {
        let mut sink = RecordingSink {
            sent: Vec::new(),
            fail_at: None,
        };
        assert_eq!(load_setup(&mut sink, &[]), Ok(0));
        assert!(sink.sent.is_empty());
    }

    #[test]
    fn broadcast_over_spi() {
        let mut spi_expectations = Vec::new();
        for msg in BROADCAST.messages {
            let frame = msg.frame().to_vec();
            let response = std::vec![0u8; frame.len()];
            spi_expectations.extend(spi_test_expects![(frame, response),]);
        }
        let spi = SpiMock::new(&spi_expectations);
        let mut answered = Answered::default();
        let mut sink = SpiSetupSink::new(spi, &mut answered);
        assert_eq!(load_setup(&mut sink, BROADCAST.messages), Ok(13));
        let (mut spi, _) = sink.release();
        spi.done();
        assert_eq!(answered.0, 13);
    }

    #[test]
    fn silent_radio_stops_after_first_frame() {
        // only the first frame may go out; the radio never answers it
        let first = BROADCAST.messages[0].frame().to_vec();
        let response = std::vec![0xFFu8; first.len()];
        let spi_expectations = spi_test_expects![(first, response),];
        let spi = SpiMock::new(&spi_expectations);
        let mut sink = SpiSetupSink::new(spi, Silent);
        assert_eq!(
            load_setup(&mut sink, BROADCAST.messages),
            Err(SetupError::Transport {
                index: 0,
                error: AciError::Response("timed out")
            })
        );
        let (mut spi, _) = sink.release();
        spi.done();
    }

    #[test]
    fn bus_error_stops_setup() {
        let mut sink = SpiSetupSink::new(BrokenBus, Answered::default());
        assert_eq!(
            load_setup(&mut sink, BROADCAST.messages),
            Err(SetupError::Transport {
                index: 0,
                error: AciError::Spi(ErrorKind::Other)
            })
        );
        let (_, answered) = sink.release();
        assert_eq!(answered.0, 0);
    }
}
