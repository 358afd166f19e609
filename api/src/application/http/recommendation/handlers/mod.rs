pub mod get_recommendations;
