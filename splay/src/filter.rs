//! Tag filter
//! 标签过滤器
//!
//! | Tag (merged, splayed) | Decision        |
//! |-----------------------|-----------------|
//! | (_, 1)                | `Drop`          |
//! | (0, 0)                | `KeepRewritten` |
//! | (1, 0)                | `Keep`          |
//!
//! Applying the filter to its own output always ends in `Keep`.
//! 对自身输出再次过滤总是得到 `Keep`。
//!
//! With `Conf::DropFrom(n)`, splayed values above level `n` are kept as is.
//! 配置 `Conf::DropFrom(n)` 时，层级低于 `n` 的 splayed 值原样保留。

use splay_tag::{Result, Tag};

use crate::{CompactFilter, Conf, Decision, ParsedConf, fatal::fatal};

const DEFAULT: SplayFilter = SplayFilter::with_conf(ParsedConf::DEFAULT);

/// Filter with default configuration
/// 使用默认配置过滤
///
/// # Panics
/// `val` has no valid tag / `val` 没有合法标签
#[inline]
pub fn filter(level: u8, key: &[u8], val: &[u8]) -> Decision {
  DEFAULT.filter(level, key, val)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SplayFilter {
  conf: ParsedConf,
}

impl SplayFilter {
  pub const NAME: &'static str = "SplayFilter";

  #[inline]
  pub const fn with_conf(conf: ParsedConf) -> Self {
    Self { conf }
  }

  pub fn new(conf: &[Conf]) -> Self {
    Self::with_conf(ParsedConf::new(conf))
  }

  #[inline]
  pub fn conf(&self) -> &ParsedConf {
    &self.conf
  }

  /// Decide on `val`, error if its tag cannot be decoded
  /// 对 `val` 做决定，标签无法解码时返回错误
  pub fn try_filter(&self, level: u8, key: &[u8], val: &[u8]) -> Result<Decision> {
    let tag = Tag::decode(val)?;

    if tag.splayed {
      if level < self.conf.drop_from {
        return Ok(Decision::Keep);
      }
      log::trace!("drop splayed {key:?} at level {level}");
      return Ok(Decision::Drop);
    }

    if !tag.merged {
      let mut new = val.to_vec();
      tag.to_merged().write_to(&mut new)?;
      return Ok(Decision::KeepRewritten(new));
    }

    Ok(Decision::Keep)
  }

  /// Decide on `val`
  /// 对 `val` 做决定
  ///
  /// # Panics
  /// `val` has no valid tag: the store is corrupt
  /// `val` 没有合法标签：存储已损坏
  #[inline]
  pub fn filter(&self, level: u8, key: &[u8], val: &[u8]) -> Decision {
    match self.try_filter(level, key, val) {
      Ok(decision) => decision,
      Err(err) => fatal(format_args!(
        "corrupt value for {key:?} at level {level}: {err}"
      )),
    }
  }
}

impl CompactFilter for SplayFilter {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn filter(&self, level: u8, key: &[u8], val: &[u8]) -> Decision {
    SplayFilter::filter(self, level, key, val)
  }

  /// Tags are only defined for materialized values, never operands
  /// 标签只对已物化的值有意义，操作数没有
  fn filter_operand(&self, level: u8, key: &[u8], _operand: &[u8]) -> bool {
    fatal(format_args!(
      "operand filtering unsupported for {key:?} at level {level} / 不支持过滤合并操作数"
    ))
  }
}
