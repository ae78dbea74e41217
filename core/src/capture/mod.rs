mod install;
mod stream;
mod tee;

pub use install::LogCapture;
pub use stream::ConsoleStream;
pub use tee::StreamTee;
