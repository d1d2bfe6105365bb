//! Domain types and pure logic for the pitchside match-data service.
//!
//! Nothing in this crate touches the filesystem or the network: the server
//! crate parses documents into [`record`] types, runs [`roster`] and
//! [`competition`] over them, and serializes the results back out.

pub mod competition;
pub mod record;
pub mod roster;
