//! chat-keys: keyboard shortcut dispatch for chat message composers.
//!
//! The heavy lifting lives in the workspace crates:
//! - `chat-keys-config`: settings, live store, hot reload
//! - `chat-keys-keybindings`: combo matching and context resolution
//!
//! This crate wires them into the `chat-keys` command-line tool.

pub mod app;
pub mod cli;
pub mod debug;
