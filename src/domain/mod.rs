//! Field mapping between the on-disk document shapes and the response
//! schema the mobile client expects.

pub mod adapt;
