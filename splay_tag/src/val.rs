//! Value builders for the write path
//! 写入路径的值构建
//!
//! Writers must produce values through these helpers (or the same layout),
//! otherwise merge and filter results are undefined.
//! 写入方必须通过这些函数（或相同布局）生成值，否则合并与过滤结果未定义。

use crate::{TAG_SIZE, Tag, error::Result};

/// Build value from tag and data / 由标签和数据构建值
#[inline]
pub fn with_tag(tag: Tag, data: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(TAG_SIZE + data.len());
  out.extend_from_slice(&tag.encode());
  out.extend_from_slice(data);
  out
}

/// Fresh value / 新值
#[inline]
pub fn new(data: &[u8]) -> Vec<u8> {
  with_tag(Tag::NEW, data)
}

/// Fresh splay write / 新的 splay 写入
#[inline]
pub fn splay(data: &[u8]) -> Vec<u8> {
  with_tag(Tag::SPLAYED, data)
}

/// Copy of an existing value marked splayed, keeping merged and data
/// 复制已有值并标记为 splayed，保留 merged 与数据
pub fn retire(val: &[u8]) -> Result<Vec<u8>> {
  let tag = Tag::decode(val)?;
  let mut out = val.to_vec();
  tag.to_splayed().write_to(&mut out)?;
  Ok(out)
}

/// Split into tag and data / 拆分为标签和数据
#[inline]
pub fn split(val: &[u8]) -> Result<(Tag, &[u8])> {
  let tag = Tag::decode(val)?;
  Ok((tag, &val[TAG_SIZE..]))
}

/// Application data after the tag / 标签之后的数据
#[inline]
pub fn data(val: &[u8]) -> Result<&[u8]> {
  split(val).map(|(_, data)| data)
}
