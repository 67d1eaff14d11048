//! Global look of the site.

mod styles;

pub use styles::GLOBAL_STYLES;
