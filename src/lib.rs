#![allow(non_snake_case)]
pub mod Utils;
pub mod numerical;
pub mod polynomial;
