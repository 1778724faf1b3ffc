pub mod configure;
pub mod dispatch;
pub mod login;
pub mod status;
