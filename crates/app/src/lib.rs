pub mod session;

pub use session::{SessionError, SheetSession};
