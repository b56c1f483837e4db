pub mod generate;
pub mod health;
pub mod password;
pub mod tasks;
