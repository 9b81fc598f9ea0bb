pub mod convert;
pub mod echo;
pub mod quote;
pub mod user_info;

pub use convert::Convert;
pub use echo::Echo;
pub use quote::Quote;
pub use user_info::UserInfo;
