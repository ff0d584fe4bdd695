//! Embedded default puzzle
//!
//! Clue table compiled into the binary at build time.

// Include generated clue table from build script
include!(concat!(env!("OUT_DIR"), "/puzzle.rs"));
