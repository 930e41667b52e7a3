//! Wire-level request types shaped for the venue's REST surface

pub mod position;
