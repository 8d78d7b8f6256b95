pub mod db_utils;
pub mod error;
pub mod list_query;
pub mod response;
