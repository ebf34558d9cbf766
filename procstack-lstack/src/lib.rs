//! procstack 連結スタック
//!
//! このクレートは、単方向連結リストで構築されたジェネリックなスタック `Lstack` を提供します。
//! 各スタックは自身のノードチェーンを排他的に所有し、コピー時には値だけを複製して
//! 新しいチェーンを先頭から末尾の順に組み立てます。
//!
//! # Examples
//! ```
//! use procstack_lstack::Lstack;
//!
//! let mut stack = Lstack::new();
//! stack.push(3);
//! stack.push(1);
//! stack.push(4);
//!
//! assert_eq!(stack.top().unwrap(), 4);
//! assert_eq!(stack.at(2).unwrap(), 3);
//! assert_eq!(stack.to_string(), "4->1->3->END");
//! ```

pub mod error;
pub mod iter;
pub mod node;
pub mod stack;

pub use error::StackError;
pub use iter::{IntoIter, Iter, IterMut};
pub use node::{Link, Node};
pub use stack::Lstack;

/// スタック操作の結果型
pub type Result<T> = std::result::Result<T, StackError>;
