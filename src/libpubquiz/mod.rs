pub mod content;
pub mod error;
pub mod question;
pub mod quiz;
pub mod round;
pub mod templates;
