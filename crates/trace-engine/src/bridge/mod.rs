pub mod protocol;

pub use protocol::{EventBuffer, EventRecord};
