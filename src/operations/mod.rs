mod hatch;

pub use hatch::{Hatch, HatchParams};
