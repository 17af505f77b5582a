pub mod clock;
pub mod simulated_gateway;
