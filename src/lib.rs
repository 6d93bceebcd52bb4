//! Cotton Classifier CLI
//!
//! 画像を予測APIへ送信し、病害判定の結果を表示する。

pub mod classify;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
