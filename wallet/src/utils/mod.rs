pub(crate) mod input;
pub mod logging;
pub(crate) mod serialization;
