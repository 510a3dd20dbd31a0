#![allow(dead_code)]

pub mod asserts;
pub mod fixtures;
pub mod headers;
