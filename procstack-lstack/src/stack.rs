//! 単方向連結リストによるスタック

use crate::{Iter, IterMut, Link, Node, Result, StackError};
use std::fmt;

/// 連結リストで構築されたスタック
///
/// 先頭（`head`）が最後に push された値です。インデックスは先頭を 0 として数えます。
/// スタックはノードチェーン全体を排他的に所有し、`size` は常に先頭から
/// 到達可能なノード数と一致します。
pub struct Lstack<T> {
    head: Link<T>,
    size: usize,
}

impl<T> Lstack<T> {
    /// 空のスタックを作成する
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    /// 値を先頭に追加する
    pub fn push(&mut self, data: T) {
        let mut node = Box::new(Node::new(data));
        node.set_next(self.head.take());
        self.head = Some(node);
        self.size += 1;
    }

    /// 先頭のノードを取り除き、その値を返す
    ///
    /// 空のスタックでは何もせず `None` を返します。
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.take_next();
            self.size -= 1;
            node.into_data()
        })
    }

    /// 先頭の値を借用する
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(Node::data)
    }

    /// 先頭の値を可変参照で借用する
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(Node::data_mut)
    }

    /// 先頭の値のコピーを返す
    ///
    /// 空のスタックでは [`StackError::Empty`] を返します。
    pub fn top(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek().cloned().ok_or(StackError::Empty)
    }

    /// スタックが空かどうか
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 要素数
    pub fn len(&self) -> usize {
        self.size
    }

    /// 全てのノードを解放する
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// 先頭ノードを取得する
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// 先頭から末尾へ値を借用するイテレータ
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    /// 先頭から末尾へ値を可変参照で借用するイテレータ
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.size,
        }
    }

    /// 指定インデックスの値を借用する
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// 指定インデックスの値を可変参照で借用する
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// 指定インデックスの値のコピーを返す
    ///
    /// `index >= len()` の場合は [`StackError::IndexOutOfRange`] を返します。
    /// 末尾の次（`index == len()`）も範囲外として扱います。
    pub fn at(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.get(index)
            .cloned()
            .ok_or(StackError::IndexOutOfRange {
                index,
                len: self.size,
            })
    }

    /// 値が最初に現れるインデックスを返す
    ///
    /// 末尾のノードも含めて全ノードを比較します。見つからなければ `None`。
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|data| data == value)
    }

    /// `source` と同じ内容に置き換える
    ///
    /// 現在のチェーンを解放してから、`source` を先頭から順に複製します。
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        self.clone_from(source);
    }

    /// 空のスタックに `source` の値を先頭から末尾の順で複製する
    fn copy_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.is_empty());

        // 末尾のリンクを指しながら、新しいノードをつなげていく
        let mut tail = &mut self.head;
        for data in source.iter() {
            let node = tail.insert(Box::new(Node::new(data.clone())));
            tail = &mut node.next;
        }
        self.size = source.size;
    }
}

impl<T> Default for Lstack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Lstack<T> {
    fn drop(&mut self) {
        // Box の再帰的な drop を避けるため、1ノードずつ解放する
        self.clear();
    }
}

impl<T: Clone> Clone for Lstack<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        copy.copy_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<T: PartialEq> PartialEq for Lstack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Lstack<T> {}

impl<T> Extend<T> for Lstack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push(data);
        }
    }
}

impl<T> FromIterator<T> for Lstack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Lstack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Lstack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.iter() {
            write!(f, "{}->", data)?;
        }
        write!(f, "END")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn stack_of(values: &[i32]) -> Lstack<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Lstack<i32> = Lstack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.head().is_none());
        assert_eq!(stack.top(), Err(StackError::Empty));
    }

    #[test]
    fn test_push_three_one_four() {
        let mut stack = Lstack::new();
        stack.push(3);
        stack.push(1);
        stack.push(4);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Ok(4));
        assert_eq!(stack.at(0), Ok(4));
        assert_eq!(stack.at(1), Ok(1));
        assert_eq!(stack.at(2), Ok(3));
        assert_eq!(stack.find(&1), Some(1));
        assert_eq!(stack.find(&9), None);

        stack.clear();
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_most_recent_push_is_index_zero() {
        let values = [10, 20, 30, 40, 50];
        let stack = stack_of(&values);

        assert_eq!(stack.len(), values.len());
        assert_eq!(stack.at(0), Ok(50));
        assert_eq!(stack.at(values.len() - 1), Ok(10));
    }

    #[test]
    fn test_at_out_of_range() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(
            stack.at(3),
            Err(StackError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            stack.at(usize::MAX),
            Err(StackError::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );

        let empty: Lstack<i32> = Lstack::new();
        assert_eq!(
            empty.at(0),
            Err(StackError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut stack: Lstack<i32> = Lstack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);

        stack.push(1);
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_then_pop_restores_state() {
        let mut stack = stack_of(&[5, 6]);
        let size_before = stack.len();
        let top_before = stack.top();

        stack.push(99);
        assert_eq!(stack.pop(), Some(99));

        assert_eq!(stack.len(), size_before);
        assert_eq!(stack.top(), top_before);
    }

    #[test]
    fn test_find_reaches_last_element() {
        let stack = stack_of(&[7, 8, 9]);
        // 先頭から 9, 8, 7
        assert_eq!(stack.find(&7), Some(2));

        let single = stack_of(&[42]);
        assert_eq!(single.find(&42), Some(0));
    }

    #[test]
    fn test_find_returns_first_match() {
        let stack = stack_of(&[1, 2, 1, 3, 2]);
        for i in 0..stack.len() {
            let value = stack.at(i).unwrap();
            let first = stack.iter().position(|v| *v == value).unwrap();
            assert_eq!(stack.find(&value), Some(first));
            assert!(first <= i);
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut stack = stack_of(&[1, 2, 3]);
        stack.clear();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);

        let mut empty: Lstack<i32> = Lstack::new();
        empty.clear();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clone_keeps_order() {
        let stack = stack_of(&[1, 2, 3, 4]);
        let copy = stack.clone();

        assert_eq!(copy.len(), stack.len());
        for i in 0..stack.len() {
            assert_eq!(copy.at(i), stack.at(i));
        }
        assert_eq!(copy, stack);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let stack = stack_of(&[1, 2, 3]);
        let mut copy = stack.clone();

        copy.push(4);
        copy.pop();
        copy.pop();
        if let Some(value) = copy.peek_mut() {
            *value = 100;
        }

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![100, 1]);
    }

    #[test]
    fn test_clone_of_empty_is_empty() {
        let empty: Lstack<String> = Lstack::new();
        let copy = empty.clone();
        assert!(copy.is_empty());
        assert_eq!(copy.len(), 0);
    }

    #[test]
    fn test_assign_replaces_contents() {
        let source = stack_of(&[1, 2, 3]);
        let mut dest = stack_of(&[9, 9, 9, 9, 9]);

        dest.assign(&source);
        assert_eq!(dest.len(), 3);
        assert_eq!(dest, source);

        dest.push(4);
        assert_eq!(source.len(), 3);

        let empty: Lstack<i32> = Lstack::new();
        dest.assign(&empty);
        assert!(dest.is_empty());
    }

    #[test]
    fn test_get_mut_changes_value() {
        let mut stack = stack_of(&[1, 2, 3]);
        if let Some(value) = stack.get_mut(2) {
            *value = 10;
        }
        assert_eq!(stack.get(2), Some(&10));
        assert!(stack.get_mut(3).is_none());
    }

    #[test]
    fn test_display_includes_last_element() {
        let stack = stack_of(&[3, 1, 4]);
        assert_eq!(stack.to_string(), "4->1->3->END");

        let empty: Lstack<i32> = Lstack::new();
        assert_eq!(empty.to_string(), "END");
    }

    #[test]
    fn test_debug_format() {
        let stack = stack_of(&[1, 2]);
        assert_eq!(format!("{:?}", stack), "[2, 1]");
    }

    #[test]
    fn test_head_walk_matches_len() {
        let stack = stack_of(&[1, 2, 3, 4]);
        let mut count = 0;
        let mut node = stack.head();
        while let Some(n) = node {
            count += 1;
            node = n.next();
        }
        assert_eq!(count, stack.len());
    }

    /// drop された回数を数えるための値
    #[derive(Clone)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_every_node_released_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut stack = Lstack::new();
            for _ in 0..5 {
                stack.push(DropCounter(drops.clone()));
            }
            drop(stack.pop());
            assert_eq!(drops.get(), 1);

            stack.clear();
            assert_eq!(drops.get(), 5);

            for _ in 0..3 {
                stack.push(DropCounter(drops.clone()));
            }
        }
        assert_eq!(drops.get(), 8);
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let stack: Lstack<u32> = (0..200_000).collect();
        assert_eq!(stack.len(), 200_000);
        drop(stack);
    }
}
