//! Page components for Connecting Minds.

mod home;

pub use home::Home;
