pub mod diagnostics;
pub mod products;
pub mod responses;

pub use diagnostics::DiagnosticsReport;
pub use products::ProductOut;
pub use responses::{ContactAck, RootMessage, SeedResponse};
