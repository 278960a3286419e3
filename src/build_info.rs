//! Compile-time build information, shown by `jukebox --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
