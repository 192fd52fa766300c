
mod capture_tests;
mod flow_tests;
