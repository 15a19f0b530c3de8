//! Caller contract violations
//! 调用方契约违规
//!
//! These abort the current operation: returning any verdict here would
//! silently corrupt stored data.
//! 这些情况会中止当前操作：此处返回任何裁决都会静默损坏数据。

use std::fmt::Display;

#[cold]
#[track_caller]
pub(crate) fn fatal(msg: impl Display) -> ! {
  log::error!("{msg}");
  panic!("{msg}");
}
