pub mod health_route;
pub mod image_check;
pub mod malicious;
pub mod root_route;
