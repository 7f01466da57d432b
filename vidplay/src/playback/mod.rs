mod driver;
mod pipeline;

pub use driver::{LoopOutcome, play};
