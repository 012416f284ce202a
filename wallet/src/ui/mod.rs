pub(crate) mod messages;
pub mod spinner;

pub use spinner::with_spinner;
