mod directive_locator_tests;
