pub mod u501_calculate_addon_total;
