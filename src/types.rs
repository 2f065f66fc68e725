//! This module defines the data types that describe the radio's services setup.
//! These types are meant to be agnostic of how the setup is delivered to the radio.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

/// The maximum number of bytes in a setup frame, including the leading length byte.
pub const MAX_FRAME_LENGTH: usize = 32;

/// How the radio's firmware stores the data of a pipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PipeStore {
    /// The pipe has no storage assigned.
    Invalid,
    /// The value is held in the radio's local attribute table.
    Local,
    /// The value lives on the peer device.
    Remote,
}

impl PipeStore {
    pub const fn into_bits(self) -> u8 {
        match self {
            PipeStore::Invalid => 0,
            PipeStore::Local => 1,
            PipeStore::Remote => 2,
        }
    }

    pub const fn from_bits(value: u8) -> Self {
        match value {
            1 => PipeStore::Local,
            2 => PipeStore::Remote,
            _ => PipeStore::Invalid,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PipeStore {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PipeStore::Invalid => defmt::write!(fmt, "Invalid"),
            PipeStore::Local => defmt::write!(fmt, "Local"),
            PipeStore::Remote => defmt::write!(fmt, "Remote"),
        }
    }
}

impl Display for PipeStore {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PipeStore::Invalid => write!(f, "Invalid"),
            PipeStore::Local => write!(f, "Local"),
            PipeStore::Remote => write!(f, "Remote"),
        }
    }
}

/// How data moves through a pipe and whether it is acknowledged.
///
/// Each variant occupies a distinct bit, so a set of types can be
/// expressed as a bit mask (see [`PipeType::into_bits()`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PipeType {
    /// Data is broadcast in advertising packets.
    TxBroadcast,
    /// Data is sent without acknowledgment (notifications).
    Tx,
    /// Data is sent and acknowledged by the peer (indications).
    TxAck,
    /// Data is received without acknowledgment.
    Rx,
    /// Data is received and must be acknowledged by the application.
    RxAck,
    /// The peer may request the data.
    TxRequest,
    /// Data may be requested from the peer.
    RxRequest,
    /// The value is set locally by the application.
    Set,
    /// Signed writes are sent.
    TxSign,
    /// Signed writes are received.
    RxSign,
    /// Data is received and acknowledged by the radio's firmware.
    RxAckAuto,
}

impl PipeType {
    pub const fn into_bits(self) -> u16 {
        match self {
            PipeType::TxBroadcast => 0x0001,
            PipeType::Tx => 0x0002,
            PipeType::TxAck => 0x0004,
            PipeType::Rx => 0x0008,
            PipeType::RxAck => 0x0010,
            PipeType::TxRequest => 0x0020,
            PipeType::RxRequest => 0x0040,
            PipeType::Set => 0x0080,
            PipeType::TxSign => 0x0100,
            PipeType::RxSign => 0x0200,
            PipeType::RxAckAuto => 0x0400,
        }
    }

    /// Returns `None` if `value` is not exactly one known pipe type bit.
    pub const fn from_bits(value: u16) -> Option<Self> {
        match value {
            0x0001 => Some(PipeType::TxBroadcast),
            0x0002 => Some(PipeType::Tx),
            0x0004 => Some(PipeType::TxAck),
            0x0008 => Some(PipeType::Rx),
            0x0010 => Some(PipeType::RxAck),
            0x0020 => Some(PipeType::TxRequest),
            0x0040 => Some(PipeType::RxRequest),
            0x0080 => Some(PipeType::Set),
            0x0100 => Some(PipeType::TxSign),
            0x0200 => Some(PipeType::RxSign),
            0x0400 => Some(PipeType::RxAckAuto),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PipeType {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PipeType::TxBroadcast => defmt::write!(fmt, "TX broadcast"),
            PipeType::Tx => defmt::write!(fmt, "TX"),
            PipeType::TxAck => defmt::write!(fmt, "TX ack"),
            PipeType::Rx => defmt::write!(fmt, "RX"),
            PipeType::RxAck => defmt::write!(fmt, "RX ack"),
            PipeType::TxRequest => defmt::write!(fmt, "TX request"),
            PipeType::RxRequest => defmt::write!(fmt, "RX request"),
            PipeType::Set => defmt::write!(fmt, "Set"),
            PipeType::TxSign => defmt::write!(fmt, "TX sign"),
            PipeType::RxSign => defmt::write!(fmt, "RX sign"),
            PipeType::RxAckAuto => defmt::write!(fmt, "RX ack auto"),
        }
    }
}

impl Display for PipeType {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PipeType::TxBroadcast => write!(f, "TX broadcast"),
            PipeType::Tx => write!(f, "TX"),
            PipeType::TxAck => write!(f, "TX ack"),
            PipeType::Rx => write!(f, "RX"),
            PipeType::RxAck => write!(f, "RX ack"),
            PipeType::TxRequest => write!(f, "TX request"),
            PipeType::RxRequest => write!(f, "RX request"),
            PipeType::Set => write!(f, "Set"),
            PipeType::TxSign => write!(f, "TX sign"),
            PipeType::RxSign => write!(f, "RX sign"),
            PipeType::RxAckAuto => write!(f, "RX ack auto"),
        }
    }
}

/// One entry of the pipe type mapping. The pipe number is the entry's
/// position in the mapping table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipeMapping {
    pub store: PipeStore,
    pub pipe_type: PipeType,
}

impl PipeMapping {
    pub const fn new(store: PipeStore, pipe_type: PipeType) -> Self {
        Self { store, pipe_type }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PipeMapping {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{{{}, {}}}", self.store, self.pipe_type)
    }
}

impl Display for PipeMapping {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{{{}, {}}}", self.store, self.pipe_type)
    }
}

/// The GAP Peripheral Preferred Connection Parameters (PPCP).
///
/// | field | unit |
/// |------:|:-----|
/// | `max_conn_interval` | 1.25 ms |
/// | `min_conn_interval` | 1.25 ms |
/// | `slave_latency` | connection events |
/// | `conn_timeout` | 10 ms |
///
/// An interval or timeout of [`GapPpcp::NO_PREFERENCE`] means no specific value is requested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapPpcp {
    pub max_conn_interval: u16,
    pub min_conn_interval: u16,
    pub slave_latency: u16,
    pub conn_timeout: u16,
}

impl GapPpcp {
    pub const NO_PREFERENCE: u16 = 0xFFFF;

    pub const fn max_conn_interval_preferred(&self) -> bool {
        self.max_conn_interval != Self::NO_PREFERENCE
    }

    pub const fn min_conn_interval_preferred(&self) -> bool {
        self.min_conn_interval != Self::NO_PREFERENCE
    }

    pub const fn conn_timeout_preferred(&self) -> bool {
        self.conn_timeout != Self::NO_PREFERENCE
    }

    /// Does this set request anything from the central at all?
    pub const fn has_preference(&self) -> bool {
        self.max_conn_interval_preferred()
            || self.min_conn_interval_preferred()
            || self.conn_timeout_preferred()
            || self.slave_latency != 0
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for GapPpcp {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PPCP {{ interval: {=u16:#x}..{=u16:#x}, latency: {=u16}, timeout: {=u16:#x} }}",
            self.min_conn_interval,
            self.max_conn_interval,
            self.slave_latency,
            self.conn_timeout,
        )
    }
}

impl Display for GapPpcp {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "PPCP {{ interval: {:#X}..{:#X}, latency: {}, timeout: {:#X} }}",
            self.min_conn_interval, self.max_conn_interval, self.slave_latency, self.conn_timeout,
        )
    }
}

/// A single frame of the setup sequence.
///
/// The first byte of the buffer is the number of meaningful bytes that follow it.
/// [`SetupMessage::frame()`] yields exactly the length byte plus those bytes, which is
/// the form the radio expects on its command interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetupMessage {
    status: u8,
    buf: [u8; MAX_FRAME_LENGTH],
}

impl SetupMessage {
    /// Build a message from a status byte and the length-prefixed `data`.
    ///
    /// Bytes beyond [`MAX_FRAME_LENGTH`] are dropped. The length byte is stored as given;
    /// use [`SetupMessage::is_well_formed()`] to check it.
    pub const fn new(status: u8, data: &[u8]) -> Self {
        let mut buf = [0u8; MAX_FRAME_LENGTH];
        let mut i = 0;
        while i < data.len() && i < MAX_FRAME_LENGTH {
            buf[i] = data[i];
            i += 1;
        }
        Self { status, buf }
    }

    /// The opaque status byte that accompanies the frame.
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// The embedded length: number of bytes following the length byte.
    pub const fn len(&self) -> usize {
        self.buf[0] as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.buf[0] == 0
    }

    /// Does the embedded length fit in the frame buffer?
    ///
    /// A message built by [`SetupMessage::new()`] from a truncated or padded array
    /// will still pass this; the exact byte content is checked by comparing against
    /// the reference table.
    pub const fn is_well_formed(&self) -> bool {
        self.len() > 0 && self.len() < MAX_FRAME_LENGTH
    }

    /// The wire form: length byte followed by the payload.
    pub fn frame(&self) -> &[u8] {
        &self.buf[..(self.len() + 1).min(MAX_FRAME_LENGTH)]
    }

    /// The bytes following the length byte.
    pub fn payload(&self) -> &[u8] {
        &self.frame()[1..]
    }

    /// The command opcode (first payload byte).
    pub const fn opcode(&self) -> u8 {
        self.buf[1]
    }

    /// The memory section of the radio's setup area being written.
    pub const fn section(&self) -> u8 {
        self.buf[2]
    }

    /// The write offset inside [`SetupMessage::section()`].
    pub const fn offset(&self) -> u8 {
        self.buf[3]
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for SetupMessage {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "setup {=u8:#x}@{=u8:#x} ({} bytes)",
            self.section(),
            self.offset(),
            self.len()
        )
    }
}

impl Display for SetupMessage {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{:02x}:", self.status)?;
        for byte in self.frame() {
            write!(f, " {:02x}", byte)?;
        }
        Ok(())
    }
}
