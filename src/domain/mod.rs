// Domain layer - Pure state and state transitions
pub mod alert;
pub mod telemetry;
pub mod view_state;
pub mod window;
