//! binconv-core: conversion between byte values and binary-digit text
//!
//! This library turns sequences of values into delimited groups of '0'/'1'
//! characters and back again:
//! - `10, 20, 30` <-> `"00001010 00010100 00011110"`
//!
//! # Architecture
//!
//! - `delimiter`: named separators and their removal patterns
//! - `encoder`: values -> padded, delimited binary text
//! - `decoder`: binary text -> fixed-width groups -> values
//! - `span`: selection mapping between byte and text offsets
//! - `metrics`: counters for conversion runs
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Stateless**: every call is independent and safe to run concurrently
//! - **Lenient decoding**: groups without digits surface as `Group::NotANumber`
//!   instead of failing; `decode_bytes` is the strict path

pub mod decoder;
pub mod delimiter;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod span;

// Re-export commonly used types
pub use decoder::{decode, decode_bytes, ByteLength, Group};
pub use delimiter::Delimiter;
pub use encoder::{encode, encode_bytes, Input};
pub use error::{Error, Result};
