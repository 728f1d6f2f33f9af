pub mod check;
pub mod verify;
