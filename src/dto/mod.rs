pub mod saved_chart_summary;
