//! splay_tag - Value tag for the splay policy
//! splay 策略的值标签
//!
//! Every value stored under the splay policy starts with a fixed-size tag.
//! 每个在 splay 策略下存储的值都以固定大小的标签开头。
//!
//! | Offset | Size     | Content                  |
//! |--------|----------|--------------------------|
//! | 0      | TAG_SIZE | tag / 标签               |
//! | 2      | n        | application data / 数据  |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
mod tag;
pub mod val;

pub use error::{Error, Result};
pub use tag::{TAG_SIZE, TAG_VER, Tag};
