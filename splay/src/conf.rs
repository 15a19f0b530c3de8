//! Filter configuration
//! 过滤器配置

/// Default configuration values
/// 默认配置值
pub mod default {
  /// Drop splayed values at every level
  /// 在所有层级删除 splayed 值
  pub const DROP_FROM: u8 = 0;
}

/// Filter configuration
/// 过滤器配置
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Lowest level at which splayed values are dropped; above it they are kept
  /// 删除 splayed 值的最低层级，更浅的层级保留
  DropFrom(u8),
}

/// Parsed configuration
/// 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub drop_from: u8,
}

impl ParsedConf {
  pub const DEFAULT: Self = Self {
    drop_from: default::DROP_FROM,
  };

  pub fn new(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for item in conf {
      match *item {
        Conf::DropFrom(v) => c.drop_from = v,
      }
    }
    c
  }
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self::DEFAULT
  }
}
