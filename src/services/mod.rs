pub mod object_store;
pub mod s3_store;
pub mod word_service;
