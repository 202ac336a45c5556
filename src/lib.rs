pub mod app_config;
pub mod catalog;
pub mod domain;
pub mod extensions;
pub mod forms;
mod geo_location_deserializer;
pub mod geolocation;
pub mod search;
pub mod view;
