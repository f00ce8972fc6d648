// テストユーティリティ
// 両方式で同じ呼び出し列を実行するヘルパーと、テスト用の出力先

#![allow(dead_code)]

use functor_dispatch::{
    functor::{invoke_dynamic, invoke_static, make_dyn_functor, make_static_functor},
    operation::{Increment, Sink},
};

/// 1回分の実行結果: (最終状態, 出力列, 呼び出し数の合計)
pub type Run = (i32, Vec<i32>, usize);

/// 動的ディスパッチで `calls` 回呼び出す
pub fn run_dynamic(increment: i32, initial: i32, calls: usize) -> Run {
    let add = Increment::new(increment);
    let mut out = Vec::new();
    let mut value = initial;
    let functor = make_dyn_functor(&add, &out);
    let count = invoke_dynamic(&*functor, &mut value, &mut out, calls);
    (value, out, count)
}

/// 静的ディスパッチで `calls` 回呼び出す
pub fn run_static(increment: i32, initial: i32, calls: usize) -> Run {
    let add = Increment::new(increment);
    let mut out = Vec::new();
    let mut value = initial;
    let functor = make_static_functor(&add);
    let count = invoke_static(&functor, &mut value, &mut out, calls);
    (value, out, count)
}

/// `v0 + (i+1)·d` の期待出力列
pub fn expected_outputs(increment: i32, initial: i32, calls: usize) -> Vec<i32> {
    (1..=calls as i32).map(|i| initial + i * increment).collect()
}

/// 追加された値とその順番を記録する出力先
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub entries: Vec<(usize, i32)>,
}

impl Sink<i32> for RecordingSink {
    fn push(&mut self, value: i32) {
        let position = self.entries.len();
        self.entries.push((position, value));
    }
}
