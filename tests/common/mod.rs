//! Common test infrastructure

pub mod test_utils;
