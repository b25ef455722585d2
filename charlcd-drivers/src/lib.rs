//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in charlcd-core:
//!
//! - Parallel 8-bit display bus over `embedded-hal` output pins
//! - Controller and script player wired to a display bus

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod lcd;
