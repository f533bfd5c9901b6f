mod directive_tests;
mod flatten_tests;
mod lazy_tests;
mod object_tests;
mod panic_tests;
