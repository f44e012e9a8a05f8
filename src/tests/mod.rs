mod property_tests;
pub mod test_utils;
