//! moba-convert - MobaXterm bookmark conversion
//!
//! Parses MobaXterm bookmark exports and renders every connection as a saved
//! session for Remmina, PuTTY or Rabbit Remote Control.

pub mod bookmarks;
pub mod config;
pub mod convert;
pub mod error;
pub mod ini;
pub mod targets;
