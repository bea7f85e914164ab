pub mod series_test;
