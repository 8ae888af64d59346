pub mod check_in;
pub mod member;
pub mod payment;
