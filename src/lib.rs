//! 患者向け検査レポート画面のCLI
//!
//! Web(WASM)版と同じカード表示モデルをターミナルとJSONに出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod scanner;
pub mod source;
pub mod terminal;
