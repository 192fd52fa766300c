//! Platform-independent core: transcoding, layout detection, the selection
//! capture protocol and the correction flow state machine.

pub mod capture;
pub mod detect;
pub mod flow;
pub mod mapping;
pub mod outcome;
pub mod ports;
