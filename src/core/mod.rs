// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{locate, Anchor, CreatureDocument, Hop};
pub use net::{HttpSource, PageSource, StaticSource};
