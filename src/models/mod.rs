pub mod mode;
pub mod payload;
pub mod version;

pub use mode::Mode;
pub use payload::{Payload, Segment};
pub use version::Version;
