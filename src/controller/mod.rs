pub mod chart_controller;
