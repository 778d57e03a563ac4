//! ユースケース（ports 経由でのみ外界に触れる）

pub mod app;
pub mod discover;
pub mod status;
