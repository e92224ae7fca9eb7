//! Integration tests for the EOS configuration resolver

mod config_resolution;
