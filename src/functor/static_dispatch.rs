//! 静的ディスパッチ版ファンクタ
//!
//! 共通の基底型は持たず、`StaticFunctor` のジェネリックメソッドが呼び出し側ごとに
//! 単相化される。出力先の型は構築時ではなく呼び出しごとに決まる。
//! 代わりにトレイトオブジェクトにはできない。

use crate::operation::{Operator, Sink};

/// 呼び出しごとに出力先の型を選べる呼び出し契約
pub trait StaticFunctor {
    /// 包んでいる演算の値型
    type Value: Copy;

    /// 演算を1回呼び出し、処理した件数（常に1）を返す
    fn call<S: Sink<Self::Value> + ?Sized>(&self, value: &mut Self::Value, out: &mut S) -> usize;
}

/// 借用した演算へ呼び出しを転送する具象ファンクタ
#[derive(Debug)]
pub struct StaticAssign<'a, Op> {
    op: &'a Op,
}

impl<'a, Op> StaticAssign<'a, Op> {
    pub fn new(op: &'a Op) -> Self {
        Self { op }
    }

    pub fn operator(&self) -> &'a Op {
        self.op
    }
}

impl<Op> Clone for StaticAssign<'_, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Op> Copy for StaticAssign<'_, Op> {}

impl<Op: Operator> StaticFunctor for StaticAssign<'_, Op> {
    type Value = Op::Value;

    #[inline]
    fn call<S: Sink<Op::Value> + ?Sized>(&self, value: &mut Op::Value, out: &mut S) -> usize {
        self.op.apply(value, out)
    }
}

/// 演算の型だけから具象ファンクタを組み立てる
pub fn make_static_functor<Op: Operator>(op: &Op) -> StaticAssign<'_, Op> {
    StaticAssign::new(op)
}

/// `calls` 回呼び出して戻り値の合計を返す
#[inline(never)]
pub fn invoke_static<F, S>(functor: &F, value: &mut F::Value, out: &mut S, calls: usize) -> usize
where
    F: StaticFunctor,
    S: Sink<F::Value> + ?Sized,
{
    let mut count = 0;
    for _ in 0..calls {
        count += functor.call(value, out);
    }
    count
}
