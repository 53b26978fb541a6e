//! Command Handlers Module
//!
//! This module contains handlers for all CLI subcommands.

pub mod count;
pub mod list;
pub mod map;
pub mod show;
pub mod unmap;
