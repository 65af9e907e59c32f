pub mod canonicalize;
pub mod compare;
pub mod export;
pub mod health;
