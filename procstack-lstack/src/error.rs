//! スタック操作のエラー

use thiserror::Error;

/// スタック操作が失敗した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// 空のスタックから先頭を取り出そうとした
    #[error("stack is empty")]
    Empty,

    /// 範囲外のインデックスを指定した
    #[error("index {index} is out of range for a stack of {len} element(s)")]
    IndexOutOfRange { index: usize, len: usize },
}
