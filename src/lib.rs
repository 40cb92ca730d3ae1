//! Procedural app icon for FeedbackFlow: a blue gradient disk with a white
//! microphone, encoded as PNG and written out as a macOS `.iconset`.

pub mod icon;
pub mod iconset;
pub mod png;
