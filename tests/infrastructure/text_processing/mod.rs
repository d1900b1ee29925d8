mod pdf_adapter_test;
