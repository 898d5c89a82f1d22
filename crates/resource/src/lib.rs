mod resolver;
mod resource_descriptor;
mod resource_kind;
mod resource_location;

pub use resolver::*;
pub use resource_descriptor::*;
pub use resource_kind::*;
pub use resource_location::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument `{0}`, {1}")]
    InvalidArgument(&'static str, String),
}

pub type Result<T> = std::result::Result<T, Error>;
