//! Data models for the movie catalog.

mod movie;
mod responses;

pub use movie::*;
pub use responses::*;
