//! Tag errors / 标签错误

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  #[error("value too short for tag: {0} bytes / 值长度不足以容纳标签")]
  Short(usize),

  #[error("unknown tag version {0} / 未知的标签版本")]
  Version(u8),

  #[error("reserved tag bits set: {0:#010b} / 标签保留位被置位")]
  Bits(u8),
}
