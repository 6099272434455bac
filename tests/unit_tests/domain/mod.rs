mod document_record_test;
mod storage_uri_test;
