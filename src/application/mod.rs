// Application layer - Use cases and trait seams
pub mod gateway_client;
pub mod poller;
pub mod prediction_oracle;
pub mod prediction_service;
