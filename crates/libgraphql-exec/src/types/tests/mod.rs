mod field_value_tests;
