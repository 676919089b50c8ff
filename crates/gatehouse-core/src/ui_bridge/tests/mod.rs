pub mod boundary_tests;
