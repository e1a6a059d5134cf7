//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{AccessToken, Claims, JwtService};
pub use password::{
    validate_password_strength, PasswordService, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN,
};
