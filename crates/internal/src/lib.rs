//! Internal utilities shared by the gostsig crates

#![forbid(unsafe_code)]

pub mod constant_time;
