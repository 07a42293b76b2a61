//! Render pipeline construction for the instanced cuboids.

pub mod basic;
