pub mod bridge;
pub mod session;

pub use bridge::{SiteState, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
