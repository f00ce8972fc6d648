//! 動的ディスパッチ版ファンクタ
//!
//! `DynFunctor` はオブジェクトセーフなトレイトで、呼び出しは vtable を経由する。
//! メソッドにジェネリクスを持てないため、出力先の型 `S` はトレイトの型引数として
//! 具象型の定義時点で固定される。

use crate::operation::{Operator, Sink};
use std::marker::PhantomData;

/// 出力先の型を固定した呼び出し契約
pub trait DynFunctor<V, S: ?Sized> {
    /// 演算を1回呼び出し、処理した件数（常に1）を返す
    fn call(&self, value: &mut V, out: &mut S) -> usize;
}

/// 借用した演算へ呼び出しを転送する具象ファンクタ
///
/// 演算はこのファンクタより長く生存しなければならない（借用チェッカーが保証する）。
pub struct DynAssign<'a, Op, S: ?Sized> {
    op: &'a Op,
    _sink: PhantomData<fn(&mut S)>,
}

impl<'a, Op, S: ?Sized> DynAssign<'a, Op, S> {
    pub fn new(op: &'a Op) -> Self {
        Self {
            op,
            _sink: PhantomData,
        }
    }

    pub fn operator(&self) -> &'a Op {
        self.op
    }
}

impl<Op, S> DynFunctor<Op::Value, S> for DynAssign<'_, Op, S>
where
    Op: Operator,
    S: Sink<Op::Value> + ?Sized,
{
    fn call(&self, value: &mut Op::Value, out: &mut S) -> usize {
        self.op.apply(value, out)
    }
}

/// 演算と出力先の型から具象ファンクタを組み立ててボックス化する
///
/// `_sink` は型推論のためだけに受け取り、保持しない。
pub fn make_dyn_functor<'a, Op, S>(op: &'a Op, _sink: &S) -> Box<dyn DynFunctor<Op::Value, S> + 'a>
where
    Op: Operator + 'a,
    S: Sink<Op::Value> + ?Sized + 'a,
{
    Box::new(DynAssign::new(op))
}

/// `calls` 回呼び出して戻り値の合計を返す
#[inline(never)]
pub fn invoke_dynamic<V, S: ?Sized>(
    functor: &dyn DynFunctor<V, S>,
    value: &mut V,
    out: &mut S,
    calls: usize,
) -> usize {
    let mut count = 0;
    for _ in 0..calls {
        count += functor.call(value, out);
    }
    count
}
