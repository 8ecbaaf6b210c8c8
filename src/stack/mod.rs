//! Stack identity types shared by the detector and selector

mod label;
mod result;

pub use label::StackLabel;
pub use result::StackResult;
