pub mod inference_repository_impl;
