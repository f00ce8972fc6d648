use std::collections::VecDeque;

pub mod increment;

pub use increment::Increment;

/// 生成された値を受け取る追記専用の出力先
///
/// 順序を保ち、容量の上限は持たない。
pub trait Sink<T> {
    /// 値を末尾に追加
    fn push(&mut self, value: T);
}

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn push(&mut self, value: T) {
        (**self).push(value);
    }
}

/// 値を捨てて追加回数だけ数える出力先
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    len: usize,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Sink<T> for CountingSink {
    #[inline]
    fn push(&mut self, _value: T) {
        self.len += 1;
    }
}

/// 状態を持つ演算の抽象化トレイト
///
/// `apply` は出力先の型についてジェネリックなので、このトレイト自体は
/// オブジェクトセーフではない。動的ディスパッチ側は出力先の型を固定した
/// 別トレイト（`functor::DynFunctor`）で包む。
pub trait Operator {
    /// 演算が扱う値の型
    type Value: Copy;

    /// `value` を更新し、更新後の値を `out` に1つ追加する
    ///
    /// 戻り値は常に1（呼び出し1回分の仕事量）。
    fn apply<S: Sink<Self::Value> + ?Sized>(&self, value: &mut Self::Value, out: &mut S) -> usize;
}
