pub mod ident;
pub mod name;
