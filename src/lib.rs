#![doc = include_str!("../README.md")]
//!
//! ## Setup data
//!
//! - [`BROADCAST`](static@crate::services::broadcast::BROADCAST)
//! - [`SETUP_MESSAGES`](static@crate::services::broadcast::SETUP_MESSAGES)
//! - [`SERVICES_PIPE_TYPE_MAPPING`](constant@crate::services::broadcast::SERVICES_PIPE_TYPE_MAPPING)
//! - [`GAP_PPCP`](constant@crate::services::broadcast::GAP_PPCP)
//!
//! ## Delivery API
//!
//! - [`load_setup()`](fn@crate::aci::load_setup)
//! - [`SetupSink`](trait@crate::aci::prelude::SetupSink)
//! - [`CommandResponse`](trait@crate::aci::prelude::CommandResponse)
//! - [`SpiSetupSink::new()`](fn@crate::aci::SpiSetupSink::new)
//!
#![no_std]

mod types;
pub use types::{GapPpcp, PipeMapping, PipeStore, PipeType, SetupMessage, MAX_FRAME_LENGTH};
pub mod aci;
pub mod services;
