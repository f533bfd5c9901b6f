mod builder_tests;
mod interface_tests;
