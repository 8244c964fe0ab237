//! Shared UI icons and emojis.
//!
//! This module provides common emoji constants used across the UI components
//! for consistent visual styling.

use console::Emoji;

// Status indicators
pub static BOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");

// Assignee availability
pub static DOT_ON: Emoji<'_, '_> = Emoji("●", "*");
pub static DOT_OFF: Emoji<'_, '_> = Emoji("○", "o");
