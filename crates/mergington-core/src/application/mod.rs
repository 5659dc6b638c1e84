/// Activity directory service
pub mod directory_service;
