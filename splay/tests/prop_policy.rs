//! Property tests for merge and filter / 合并与过滤属性测试

use proptest::prelude::*;
use splay::{Decision, Tag, collapse, filter, partial_merge, val};

fn arb_tag() -> impl Strategy<Value = Tag> {
  (any::<bool>(), any::<bool>()).prop_map(|(merged, splayed)| Tag { merged, splayed })
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..32)
}

/// Tagged value / 带标签的值
fn arb_val() -> impl Strategy<Value = Vec<u8>> {
  (arb_tag(), arb_data()).prop_map(|(tag, data)| val::with_tag(tag, &data))
}

fn arb_key() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(200))]

  /// Collapse returns exactly the newest operand
  /// 合并结果恰为最新操作数
  #[test]
  fn prop_collapse_last(
    base in prop::option::of(arb_val()),
    ops in prop::collection::vec(arb_val(), 1..8),
  ) {
    let out = collapse(base.as_deref(), &ops);
    prop_assert_eq!(&out, ops.last().unwrap());
  }

  /// Pre-folding operands pairwise does not change the collapse result
  /// 预先两两合并操作数不改变最终结果
  #[test]
  fn prop_partial_then_full(
    base in prop::option::of(arb_val()),
    ops in prop::collection::vec(arb_val(), 2..8),
    split in any::<prop::sample::Index>(),
  ) {
    let at = 1 + split.index(ops.len() - 1);
    let (head, tail) = ops.split_at(at);
    let mut folded = head[0].clone();
    for op in &head[1..] {
      folded = partial_merge(&folded, op);
    }
    let mut seq = vec![folded];
    seq.extend_from_slice(tail);
    prop_assert_eq!(collapse(base.as_deref(), &seq), collapse(base.as_deref(), &ops));
  }

  /// Decision depends only on the tag
  /// 决策只取决于标签
  #[test]
  fn prop_filter_by_tag(
    tag in arb_tag(),
    data in arb_data(),
    level in any::<u8>(),
    key in arb_key(),
  ) {
    let v = val::with_tag(tag, &data);
    let d = filter(level, &key, &v);
    if tag.splayed {
      prop_assert_eq!(d, Decision::Drop);
    } else if tag.merged {
      prop_assert_eq!(d, Decision::Keep);
    } else {
      prop_assert!(d.is_changed());
      let new = d.into_value().unwrap();
      prop_assert_eq!(new.len(), v.len());
      prop_assert_eq!(&new[..], &val::with_tag(tag.to_merged(), &data)[..]);
    }
  }

  /// Filtering the rewritten output stabilizes to Keep with identical bytes,
  /// and flags never go back to false along the chain
  /// 对改写输出再次过滤稳定为 Keep 且字节不变，且标志在链上不会回退
  #[test]
  fn prop_filter_chain(v in arb_val(), levels in prop::collection::vec(any::<u8>(), 1..6)) {
    let mut cur = v;
    for level in levels {
      let before = Tag::decode(&cur).unwrap();
      match filter(level, b"k", &cur) {
        Decision::Drop => {
          prop_assert!(before.splayed);
          break;
        }
        Decision::Keep => {
          prop_assert!(before.merged);
        }
        Decision::KeepRewritten(new) => {
          let after = Tag::decode(&new).unwrap();
          prop_assert!(after.merged);
          prop_assert_eq!(after.splayed, before.splayed);
          prop_assert_eq!(filter(level, b"k", &new), Decision::Keep);
          cur = new;
        }
      }
    }
  }
}
