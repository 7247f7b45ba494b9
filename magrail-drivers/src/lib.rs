//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in magrail-core on top of plain GPIO:
//!
//! - Electromagnet bank on one output pin per magnet
//! - Step/dir stepper driver with blocking pulse timing

#![no_std]
#![deny(unsafe_code)]

pub mod magnet;
pub mod stepper;
