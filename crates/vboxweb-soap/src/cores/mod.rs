pub mod namespace;
pub mod tag;
pub mod tag_name;
pub mod tag_value;

pub use namespace::*;
pub use tag::*;
pub use tag_name::*;
pub use tag_value::*;
