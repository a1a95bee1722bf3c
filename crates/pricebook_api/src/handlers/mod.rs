//! Request handlers for the HTTP surface.

pub mod items;
