//! The four backend services. Each one talks only to the [`store::RecordStore`];
//! none of them calls another.

pub mod authentication;
pub mod catalog;
pub mod directory;
pub mod registration;

pub use registration::RegistrationOptions;
