//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests call handlers through the public traits with a recording mock bot.
