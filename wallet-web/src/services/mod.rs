//! Browser services

pub mod starkey;
