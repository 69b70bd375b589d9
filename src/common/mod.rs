//! Input and configuration collaborators of the broadcast core.
//!
//! - `locations`: reads the `(x,y)` node locations file
//! - `config`: optional `bip.toml` run settings

pub mod config;
pub mod locations;
