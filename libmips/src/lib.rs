pub mod op;
pub mod register;
pub mod word;
