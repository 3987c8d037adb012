#![allow(dead_code)]

pub mod generate;
pub use generate::*;

pub mod probe;
pub use probe::*;

pub mod stat;
pub use stat::*;

pub mod table;
pub use table::*;

pub use compose_idents;
