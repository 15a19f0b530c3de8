//! Value tag
//! 值标签
//!
//! ## Layout (version 1)
//! 布局（版本 1）
//!
//! | Offset | Size | Field | Description                            |
//! |--------|------|-------|----------------------------------------|
//! | 0      | 1    | ver   | Layout version / 布局版本               |
//! | 1      | 1    | bits  | bit0 merged, bit1 splayed / 状态位      |
//!
//! Bits 2..7 are reserved and must be zero.
//! 第 2..7 位保留，必须为零。

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::error::{Error, Result};

/// Current layout version / 当前布局版本
pub const TAG_VER: u8 = 1;

/// Tag size in bytes / 标签字节数
pub const TAG_SIZE: usize = 2;

const MERGED: u8 = 0b01;
const SPLAYED: u8 = 0b10;
const RESERVED: u8 = !(MERGED | SPLAYED);

/// On-disk form / 磁盘格式
#[repr(C)]
#[derive(Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
struct Raw {
  ver: u8,
  bits: u8,
}

const _: () = assert!(size_of::<Raw>() == TAG_SIZE);

/// Decoded tag
/// 解码后的标签
///
/// Both flags are monotone for one physical value: the filter only sets
/// `merged`, a splay write only sets `splayed`. A fresh write starts over.
/// 两个标志对同一物理值都是单调的：过滤器只设置 `merged`，splay 写入只设置 `splayed`。
/// 新写入从头开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag {
  /// Survived at least one compaction pass / 至少经历过一次压缩
  pub merged: bool,
  /// Retired by a splay write / 已被 splay 写入淘汰
  pub splayed: bool,
}

impl Tag {
  pub const SIZE: usize = TAG_SIZE;

  /// Fresh write / 新写入
  pub const NEW: Self = Self {
    merged: false,
    splayed: false,
  };

  /// Fresh splay write / 新的 splay 写入
  pub const SPLAYED: Self = Self {
    merged: false,
    splayed: true,
  };

  #[inline]
  pub const fn new() -> Self {
    Self::NEW
  }

  /// Set merged / 设置 merged
  #[inline]
  pub const fn to_merged(self) -> Self {
    Self {
      merged: true,
      ..self
    }
  }

  /// Set splayed / 设置 splayed
  #[inline]
  pub const fn to_splayed(self) -> Self {
    Self {
      splayed: true,
      ..self
    }
  }

  #[inline]
  const fn bits(self) -> u8 {
    (self.merged as u8) * MERGED | (self.splayed as u8) * SPLAYED
  }

  #[inline]
  const fn raw(self) -> Raw {
    Raw {
      ver: TAG_VER,
      bits: self.bits(),
    }
  }

  /// Encode to bytes / 编码为字节
  #[inline]
  pub fn encode(self) -> [u8; TAG_SIZE] {
    let mut out = [0u8; TAG_SIZE];
    out.copy_from_slice(self.raw().as_bytes());
    out
  }

  /// Overwrite the tag prefix of `val` in place
  /// 原地覆盖 `val` 的标签前缀
  #[inline]
  pub fn write_to(self, val: &mut [u8]) -> Result<()> {
    let len = val.len();
    self
      .raw()
      .write_to_prefix(val)
      .map_err(|_| Error::Short(len))
  }

  /// Decode from the front of a value
  /// 从值的开头解码
  pub fn decode(val: &[u8]) -> Result<Self> {
    let (raw, _) = Raw::read_from_prefix(val).map_err(|_| Error::Short(val.len()))?;
    if raw.ver != TAG_VER {
      return Err(Error::Version(raw.ver));
    }
    if raw.bits & RESERVED != 0 {
      return Err(Error::Bits(raw.bits));
    }
    Ok(Self {
      merged: raw.bits & MERGED != 0,
      splayed: raw.bits & SPLAYED != 0,
    })
  }
}
