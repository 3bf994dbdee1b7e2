//! Submit handler seam
//!
//! The form hands validated records to a `SubmitHandler`. The shipped
//! handler only logs them.

mod logging;
mod traits;

pub use logging::LoggingHandler;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
