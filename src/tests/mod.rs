// Test modules for petfriends-client crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.
// HTTP-level scenarios live in the integration suites under tests/.
