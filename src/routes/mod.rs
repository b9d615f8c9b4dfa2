pub mod availability_routes;
