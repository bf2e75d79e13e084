pub mod image_check_route;
