//! splay - Tag-based merge and compaction filter
//! 基于标签的合并与压缩过滤
//!
//! Two stateless policies plugged into an LSM engine:
//! 接入 LSM 引擎的两个无状态策略：
//!
//! | Policy        | Invoked by          | Result                          |
//! |---------------|---------------------|---------------------------------|
//! | `SplayMerge`  | merge / 合并         | newest operand / 最新操作数      |
//! | `SplayFilter` | compaction / 压缩    | `Keep`, `KeepRewritten`, `Drop` |
//!
//! Value lifecycle / 值生命周期:
//!
//! ```text
//! NEW(0,0) --filter--> MERGED(1,0)
//! NEW | MERGED --splay write--> SPLAYED(_,1) --filter--> removed
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod conf;
mod decision;
mod fatal;
mod filter;
mod merge;
mod op;

pub use conf::{Conf, ParsedConf};
pub use decision::Decision;
pub use filter::{SplayFilter, filter};
pub use merge::{SplayMerge, collapse, partial_merge};
pub use op::{CompactFilter, MergeOp};
pub use splay_tag::{Error, Result, TAG_SIZE, TAG_VER, Tag, val};
