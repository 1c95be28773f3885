mod source_tests;
mod syntax_error_tests;
mod utils;
mod value_tests;
