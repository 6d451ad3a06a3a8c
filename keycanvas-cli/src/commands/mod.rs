pub mod about;
pub mod address;
pub mod compare;
pub mod config_cmd;
pub mod gallery;
pub mod generate;
pub mod open;
pub mod pattern;
pub mod share;
