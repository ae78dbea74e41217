pub mod register;
pub mod tabs;
pub mod writer;

pub use register::{register, TabFactory, TabSpec, UiTabsHost, LOG_TAG};
pub use writer::{init_host_logging, TeeMakeWriter};
