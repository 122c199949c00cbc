pub mod config_test;
pub mod generator_test;
pub mod loop_shutdown_test;
pub mod rolling_window_test;
pub mod serialization_test;
