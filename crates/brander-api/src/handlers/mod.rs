pub mod brand;
pub mod health;
pub mod presign;
