mod client_directive_factory_tests;
mod document_tests;
