use super::{Operator, Sink};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// 加算して結果を記録する演算
///
/// 構築後に加算量は変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Increment<T> {
    arg: T,
}

impl<T: Copy> Increment<T> {
    pub fn new(arg: T) -> Self {
        Self { arg }
    }

    /// 1回の呼び出しで加算される量
    pub fn arg(&self) -> T {
        self.arg
    }
}

impl<T> Operator for Increment<T>
where
    T: Copy + AddAssign,
{
    type Value = T;

    #[inline]
    fn apply<S: Sink<T> + ?Sized>(&self, value: &mut T, out: &mut S) -> usize {
        *value += self.arg;
        out.push(*value);
        1
    }
}
