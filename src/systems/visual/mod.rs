pub mod avatar;
pub mod speech;
