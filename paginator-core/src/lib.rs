pub mod error;
pub mod page;
pub mod paginator;
pub mod prelude;
pub mod source;
