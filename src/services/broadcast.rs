//! The services setup for a broadcast-only peripheral.
//!
//! The GATT layout holds the GAP service (with the device name `bcastcsemi`)
//! and the GATT service. No connection parameters are preferred.

use super::ServicesSetup;
use crate::types::{GapPpcp, PipeMapping, PipeStore, PipeType, SetupMessage};

/// The pipe used to set the GAP device name.
pub const PIPE_GAP_DEVICE_NAME_SET: u8 = 1;

pub const NUMBER_OF_PIPES: usize = 1;

pub const SERVICES_PIPE_TYPE_MAPPING: [PipeMapping; NUMBER_OF_PIPES] =
    [PipeMapping::new(PipeStore::Local, PipeType::Set)];

/// The GAP Peripheral Preferred Connection Parameters.
pub mod gap_ppcp {
    /// Maximum connection interval as a multiple of 1.25 ms (no specific value requested).
    pub const MAX_CONN_INT: u16 = 0xFFFF;
    /// Minimum connection interval as a multiple of 1.25 ms (no specific minimum).
    pub const MIN_CONN_INT: u16 = 0xFFFF;
    pub const SLAVE_LATENCY: u16 = 0;
    /// Supervision timeout multiplier as a multiple of 10 ms (no specific value requested).
    pub const CONN_TIMEOUT: u16 = 0xFFFF;
}

pub const GAP_PPCP: GapPpcp = GapPpcp {
    max_conn_interval: gap_ppcp::MAX_CONN_INT,
    min_conn_interval: gap_ppcp::MIN_CONN_INT,
    slave_latency: gap_ppcp::SLAVE_LATENCY,
    conn_timeout: gap_ppcp::CONN_TIMEOUT,
};

pub const NB_SETUP_MESSAGES: usize = 13;

/// The setup frames, in the order they must be sent.
///
/// Every frame writes into the radio's setup area at increasing offsets, so
/// frames must never be reordered, merged, or skipped.
pub static SETUP_MESSAGES: [SetupMessage; NB_SETUP_MESSAGES] = [
    SetupMessage::new(0x00, &[0x07, 0x06, 0x00, 0x00, 0x03, 0x02, 0x41, 0xd7]),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x01,
            0x01, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    ),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x10, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x03, 0x90, 0x00, 0x64,
        ],
    ),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x10, 0x38, 0x02, 0xff, 0x02, 0x58, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    ),
    SetupMessage::new(0x00, &[0x05, 0x06, 0x10, 0x54, 0x00, 0x00]),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x20, 0x00, 0x04, 0x04, 0x02, 0x02, 0x00, 0x01, 0x28, 0x00, 0x01, 0x00,
            0x18, 0x04, 0x04, 0x05, 0x05, 0x00, 0x02, 0x28, 0x03, 0x01, 0x0e, 0x03, 0x00, 0x00,
            0x2a, 0x04, 0x14, 0x0b,
        ],
    ),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x20, 0x1c, 0x05, 0x00, 0x03, 0x2a, 0x00, 0x01, 0x62, 0x63, 0x61, 0x73,
            0x74, 0x63, 0x73, 0x65, 0x6d, 0x69, 0x2e, 0x04, 0x04, 0x05, 0x05, 0x00, 0x04, 0x28,
            0x03, 0x01, 0x02, 0x05,
        ],
    ),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x20, 0x38, 0x00, 0x01, 0x2a, 0x06, 0x04, 0x03, 0x02, 0x00, 0x05, 0x2a,
            0x01, 0x01, 0x00, 0x00, 0x04, 0x04, 0x05, 0x05, 0x00, 0x06, 0x28, 0x03, 0x01, 0x02,
            0x07, 0x00, 0x04, 0x2a,
        ],
    ),
    SetupMessage::new(
        0x00,
        &[
            0x1f, 0x06, 0x20, 0x54, 0x06, 0x04, 0x09, 0x08, 0x00, 0x07, 0x2a, 0x04, 0x01, 0xff,
            0xff, 0xff, 0xff, 0x00, 0x00, 0xff, 0xff, 0x04, 0x04, 0x02, 0x02, 0x00, 0x08, 0x28,
            0x00, 0x01, 0x01, 0x18,
        ],
    ),
    SetupMessage::new(0x00, &[0x04, 0x06, 0x20, 0x70, 0x00]),
    SetupMessage::new(
        0x00,
        &[
            0x0d, 0x06, 0x40, 0x00, 0x2a, 0x00, 0x01, 0x00, 0x80, 0x04, 0x00, 0x03, 0x00, 0x00,
        ],
    ),
    SetupMessage::new(0x00, &[0x06, 0x06, 0x60, 0x00, 0x00, 0x00, 0x00]),
    SetupMessage::new(0x00, &[0x06, 0x06, 0xf0, 0x00, 0x03, 0x4c, 0xf2]),
];

/// The broadcast setup as a single value.
pub static BROADCAST: ServicesSetup = ServicesSetup {
    pipe_mapping: &SERVICES_PIPE_TYPE_MAPPING,
    ppcp: GAP_PPCP,
    messages: &SETUP_MESSAGES,
};
