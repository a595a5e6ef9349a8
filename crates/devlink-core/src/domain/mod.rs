//! 개발자 네트워크의 도메인 모델.

mod post;
mod profile;
mod store;
mod user;

pub use post::*;
pub use profile::*;
pub use store::*;
pub use user::*;
