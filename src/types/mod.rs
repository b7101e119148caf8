pub mod db;
pub mod dto;
