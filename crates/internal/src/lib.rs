//! Internal utilities for the edcrypt library
//!
//! Nothing in here is cryptographic on its own. The helpers exist so that the
//! arithmetic and signature crates share one definition of "constant time"
//! and one definition of "little-endian".

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
