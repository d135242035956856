pub mod category;
pub mod error;
pub mod record;
pub mod response;
pub mod term;

pub use category::NmmCategory;
pub use error::{
    InvalidElement, Malformation, MappingDirection, NamingError, NamingWarning, Result,
};
pub use record::{NameElementRecord, NeeItem};
pub use response::{EnZh, NamingFailure, NamingResponse, NamingSuccess, Nmmsn, NmmsnZh};
pub use term::{Operator, Side, Term};
