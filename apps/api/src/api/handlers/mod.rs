pub mod health;
pub mod things;
