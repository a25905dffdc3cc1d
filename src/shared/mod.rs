//! Cross-cutting concerns shared by adapters and `main`.

pub mod config;
