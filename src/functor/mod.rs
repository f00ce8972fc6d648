// 演算を包むファンクタ層
// 同じ呼び出し契約を、実行時（vtable経由）とコンパイル時（単相化）の2通りで提供する

pub mod dynamic_dispatch;
pub mod static_dispatch;

pub use dynamic_dispatch::{invoke_dynamic, make_dyn_functor, DynAssign, DynFunctor};
pub use static_dispatch::{invoke_static, make_static_functor, StaticAssign, StaticFunctor};
