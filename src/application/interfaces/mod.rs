mod answer_service;

pub use answer_service::*;
