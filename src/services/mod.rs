//! A module to contain the services setups that can be loaded into the radio.
//!
//! Each setup is generated for one GATT layout and must be sent to the radio
//! as a whole. See [`load_setup()`](fn@crate::aci::load_setup).

use crate::types::{GapPpcp, PipeMapping, SetupMessage};

pub mod broadcast;

/// Everything a driver needs to bring up the radio with one services layout.
#[derive(Debug, Clone, Copy)]
pub struct ServicesSetup {
    /// The pipe type mapping. The pipe number is the index into this slice.
    pub pipe_mapping: &'static [PipeMapping],
    /// The GAP preferred connection parameters.
    pub ppcp: GapPpcp,
    /// The setup frames in the order they must be sent.
    pub messages: &'static [SetupMessage],
}

impl ServicesSetup {
    pub const fn number_of_pipes(&self) -> usize {
        self.pipe_mapping.len()
    }

    pub const fn number_of_messages(&self) -> usize {
        self.messages.len()
    }

    /// Get the mapping of a `pipe`. Returns `None` for pipe numbers outside the mapping.
    pub fn pipe(&self, pipe: usize) -> Option<&PipeMapping> {
        self.pipe_mapping.get(pipe)
    }
}
