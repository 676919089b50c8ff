pub mod manifest_tests;
