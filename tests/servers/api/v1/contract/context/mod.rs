pub mod climate;
pub mod health_check;
pub mod legacy;
pub mod session;
pub mod vehicle;
pub mod welcome;
