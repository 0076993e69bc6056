//! Ports - 抽象化レイヤー
//!
//! レポート生成が外部に依存するのはシステム時計だけなので、
//! ここにあるのは Clock のみです。

pub mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};
