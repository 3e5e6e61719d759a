pub mod inference_repository;
