pub mod games;
pub mod home;
