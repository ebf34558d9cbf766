//! スタックを構成するノード

use std::mem;

/// 次のノードへの所有リンク（末尾では `None`）
pub type Link<T> = Option<Box<Node<T>>>;

/// 値を1つと次のノードへのリンクを保持するセル
///
/// 各ノードは直前のノード（先頭ノードの場合はスタック）だけに所有されます。
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// 値からノードを作成する（次のノードなし）
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// 保持している値を取得する
    pub fn data(&self) -> &T {
        &self.data
    }

    /// 保持している値を可変参照で取得する
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// 値を差し替え、以前の値を返す
    pub fn set_data(&mut self, data: T) -> T {
        mem::replace(&mut self.data, data)
    }

    /// 次のノードを取得する
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// 次のノードを可変参照で取得する
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// 次のリンクを差し替え、以前のリンクを返す
    pub fn set_next(&mut self, next: Link<T>) -> Link<T> {
        mem::replace(&mut self.next, next)
    }

    /// 次のリンクを切り離して返す
    pub fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// ノードを消費して値を取り出す
    pub fn into_data(self) -> T {
        self.data
    }
}
