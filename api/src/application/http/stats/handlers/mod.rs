pub mod get_stats;
