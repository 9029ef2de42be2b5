//! Storage of the expanded address list.

mod address_list;

pub use address_list::{read_address_list, read_address_list_or_default, write_address_list};
