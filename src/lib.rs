pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod logging;
pub mod pointer;
pub mod runtime;
pub mod scroll;
pub mod storage;
pub mod typewriter;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
