//! NeuraHive Bot Library
//!
//! A Telegram bot that answers every message with one of four scripted
//! personalities.
//!
//! This crate provides the core functionality for:
//! - Loading the personality manifest (with built-in defaults)
//! - Scoring messages and selecting the answering personality
//! - Serving the Telegram webhook over HTTP
//! - Sending optional push notifications

pub mod brain;
pub mod commands;
pub mod config;
pub mod notify;
pub mod prediction;
pub mod server;
pub mod telegram;
