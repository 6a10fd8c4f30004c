//! Integration tests for pair generation, preference storage and the CLI

mod cli_contracts;
mod generator_determinism;
mod session_flow;
mod support;
