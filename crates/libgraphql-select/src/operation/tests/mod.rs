mod document_formatter_tests;
