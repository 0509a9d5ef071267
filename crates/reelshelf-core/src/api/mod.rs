//! API implementation submodules.
//!
//! Each submodule contains `impl MovieOrganizer` blocks that extend the
//! public API. The struct definition remains in `lib.rs`.

mod builder;
mod catalog;

pub use builder::MovieOrganizerBuilder;
