//! Last-writer-wins merge
//! 最后写入者获胜的合并
//!
//! Merge is used as a deferred overwrite log: data is never combined.
//! 合并仅作为延迟覆盖日志使用：数据从不组合。

use crate::{MergeOp, fatal::fatal};

/// Collapse base value and operands (oldest first) into the newest operand
/// 将基础值和操作数（旧在前）折叠为最新的操作数
///
/// The base and older operands are discarded. Tag bits are not carried over
/// from them: the result is the newest operand exactly as its writer tagged it.
/// 基础值与旧操作数被丢弃，其标签位不会被继承：结果就是写入方打好标签的最新操作数。
///
/// # Panics
/// `operands` is empty / `operands` 为空
#[inline]
pub fn collapse<T: AsRef<[u8]>>(existing: Option<&[u8]>, operands: &[T]) -> Vec<u8> {
  let Some(last) = operands.last() else {
    fatal("collapse without operands / 合并时没有操作数");
  };
  log::trace!(
    "collapse {} operands, base {}",
    operands.len(),
    existing.is_some()
  );
  last.as_ref().to_vec()
}

/// Fold two adjacent operands: the newer one wins
/// 合并两个相邻操作数：较新者获胜
#[inline]
pub fn partial_merge(_left: &[u8], right: &[u8]) -> Vec<u8> {
  right.to_vec()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SplayMerge;

impl SplayMerge {
  pub const NAME: &'static str = "SplayMerge";
}

impl MergeOp for SplayMerge {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn full_merge(&self, _key: &[u8], existing: Option<&[u8]>, operands: &[&[u8]]) -> Vec<u8> {
    collapse(existing, operands)
  }

  fn partial_merge(&self, _key: &[u8], left: &[u8], right: &[u8]) -> Option<Vec<u8>> {
    Some(partial_merge(left, right))
  }
}
