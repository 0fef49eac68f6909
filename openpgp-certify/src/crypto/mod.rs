//! RSA key material, hash dispatch, and the verification engine.

pub mod hash;
pub mod mpi;
pub mod verify;
