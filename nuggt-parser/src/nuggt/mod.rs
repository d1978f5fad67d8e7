//! Main module for nuggt library functionality

pub mod ast;
pub mod formats;
pub mod layout;
pub mod lexing;
pub mod parsing;
