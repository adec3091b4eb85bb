pub mod envelope;
pub mod paginate;

pub use envelope::{Links, Payload, NO_PAGE};
pub use paginate::{paginate, Page};
