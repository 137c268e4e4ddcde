//! # amparo-core
//!
//! Config-driven content model for the Amparo practice site.
//!
//! The site renders whatever the admin panel has saved into a flat list of
//! key/value [`config::ConfigRecord`]s, and it must keep rendering something
//! sensible when nothing has been saved yet. Every lookup in this crate is
//! therefore *fail-open*: a missing key, a malformed value, or a config list
//! that has not arrived yet resolves to a hardcoded default, never to an
//! error.
//!
//! The crate is pure Rust with no browser dependencies, so every contract the
//! site relies on (visibility fallbacks, active/order filtering, highlight
//! parsing, color math, the one-shot reveal state machine) is unit-tested
//! natively here.
//!
//! ## Modules
//!
//! - [`config`] - `ConfigRecord` plus typed views over the known keys
//! - [`visibility`] - per-section visibility flags with fail-open defaults
//! - [`specialty`] - specialty cards and the active/order display convention
//! - [`text`] - the `(highlight)` inline markup convention
//! - [`color`] - soft/translucent accent color derivation
//! - [`icon`] - the closed icon catalog with a default arm
//! - [`reveal`] - the Hidden -> Revealed entrance animation state machine
//! - [`form`] - the admin "about texts" form model and its write plan

pub mod color;
pub mod config;
pub mod form;
pub mod icon;
pub mod reveal;
pub mod specialty;
pub mod text;
pub mod visibility;

pub use config::ConfigRecord;
pub use icon::SpecialtyIcon;
pub use reveal::Reveal;
pub use specialty::Specialty;
pub use visibility::SectionVisibility;
