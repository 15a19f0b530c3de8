//! Engine-facing policy traits
//! 面向引擎的策略 trait

use crate::Decision;

/// Merge operator
/// 合并操作符
pub trait MergeOp: Send + Sync {
  /// Persisted by the engine; must stay stable across versions
  /// 由引擎持久化，跨版本必须保持不变
  fn name(&self) -> &'static str;

  /// Fold base value and operands (oldest first) into one value
  /// 将基础值和操作数（旧在前）合并为一个值
  ///
  /// Panics if `operands` is empty.
  /// `operands` 为空时 panic。
  fn full_merge(&self, key: &[u8], existing: Option<&[u8]>, operands: &[&[u8]]) -> Vec<u8>;

  /// Fold two adjacent operands without a base, `None` if unsupported
  /// 无基础值时合并两个相邻操作数，不支持时返回 `None`
  fn partial_merge(&self, key: &[u8], left: &[u8], right: &[u8]) -> Option<Vec<u8>>;
}

/// Compaction filter
/// 压缩过滤器
pub trait CompactFilter: Send + Sync {
  fn name(&self) -> &'static str;

  /// Decide what happens to `val` / 决定 `val` 的去留
  fn filter(&self, level: u8, key: &[u8], val: &[u8]) -> Decision;

  /// Decide on a raw merge operand, `true` to remove
  /// 对原始合并操作数做决定，`true` 表示删除
  fn filter_operand(&self, level: u8, key: &[u8], operand: &[u8]) -> bool;
}
