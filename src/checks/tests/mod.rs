mod link_audit_tests;
