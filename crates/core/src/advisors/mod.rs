//! Category advisors. Each one is a pure function of the canonical
//! [`Destination`](crate::Destination) plus whichever request fields it needs.

pub mod budget;
pub mod dietary;
pub mod events;
pub mod photo_spots;
pub mod transport;
pub mod weather;
