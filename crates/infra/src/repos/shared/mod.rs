pub mod inmemory_repo;
pub mod mongo_repo;
pub mod repo;
pub mod profile_mongo;
