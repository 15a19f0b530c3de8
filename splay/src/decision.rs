//! Filter decision / 过滤决策

/// Verdict for one value during compaction
/// 压缩时对单个值的裁决
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
  /// Keep bytes unchanged / 原样保留
  Keep,
  /// Keep with new bytes / 以新字节保留
  KeepRewritten(Vec<u8>),
  /// Remove the key / 删除该键
  Drop,
}

impl Decision {
  /// Value changed flag / 值是否改变
  #[inline]
  pub const fn is_changed(&self) -> bool {
    matches!(self, Self::KeepRewritten(_))
  }

  #[inline]
  pub const fn is_drop(&self) -> bool {
    matches!(self, Self::Drop)
  }

  /// Kept, rewritten or not / 保留（无论是否改写）
  #[inline]
  pub const fn is_keep(&self) -> bool {
    !self.is_drop()
  }

  /// New bytes if rewritten / 改写后的新字节
  #[inline]
  pub fn new_value(&self) -> Option<&[u8]> {
    match self {
      Self::KeepRewritten(v) => Some(v),
      _ => None,
    }
  }

  #[inline]
  pub fn into_value(self) -> Option<Vec<u8>> {
    match self {
      Self::KeepRewritten(v) => Some(v),
      _ => None,
    }
  }
}
