mod ring_text;
pub use ring_text::RingText;
