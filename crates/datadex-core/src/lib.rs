#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chunker;
pub mod config;
pub mod corpus;
pub mod error;
pub mod tokenizer;
pub mod types;
