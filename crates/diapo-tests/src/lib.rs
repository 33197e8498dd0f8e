//! Integration test crate for Diaporama Maker.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every diapo crate to verify they work together.

#[cfg(test)]
mod editor;

#[cfg(test)]
mod timeline;
