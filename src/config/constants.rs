//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

use std::time::Duration;

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Store
// =============================================================================

/// Deadline applied to the store calls of a single service operation
pub const STORE_TIMEOUT: Duration = Duration::from_secs(100);

/// Default MongoDB connection string (for development)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "customer_registry";

/// Collection holding user documents
pub const USER_COLLECTION: &str = "user";

/// Collection holding customer documents
pub const CUSTOMER_COLLECTION: &str = "customer";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Password Hashing (argon2id)
// =============================================================================

/// Memory cost in KiB (32 MiB)
pub const HASH_MEMORY_COST_KIB: u32 = 1 << 15;

/// Number of passes over memory
pub const HASH_TIME_COST: u32 = 2;

/// Degree of parallelism
pub const HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Response Envelope
// =============================================================================

/// Placeholder for the `error` field when there is nothing to report
pub const NOT_AVAILABLE: &str = "NA";

pub const MSG_RECORDS_FETCHED: &str = "Records Fetched Successfully";
pub const MSG_RECORD_FETCHED: &str = "Record Fetched Successfully";
pub const MSG_NO_RECORDS: &str = "No Records Found";
pub const MSG_VALIDATION: &str = "Validation Error";
pub const MSG_BINDING: &str = "Error occurred while binding JSON";
pub const MSG_PARENT_MISSING: &str =
    "The user associated with customer is not present or is deleted";
pub const MSG_DUPLICATE_USER: &str = "User with this e-mail or phone already exists";

pub const MSG_USER_LIST_FAILED: &str = "Error occurred while listing user items";
pub const MSG_USER_FETCH_FAILED: &str = "Error occurred while fetching user";
pub const MSG_EMAIL_CHECK_FAILED: &str = "Error occurred while checking for e-mail";
pub const MSG_PHONE_CHECK_FAILED: &str = "Error occurred while checking for phone number";
pub const MSG_USER_NOT_CREATED: &str = "User item was not created";
pub const MSG_USER_ADDED: &str = "User Added Successfully";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETE_FAILED: &str = "Failed to delete user";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
pub const MSG_USER_NOT_FOUND: &str = "User not found or is already deleted";

pub const MSG_CUSTOMER_LIST_FAILED: &str = "Error occurred while listing customer items";
pub const MSG_CUSTOMER_FETCH_FAILED: &str = "Error occurred while fetching customer";
pub const MSG_CUSTOMER_NOT_CREATED: &str = "Customer item was not created";
pub const MSG_CUSTOMER_ADDED: &str = "Customer Added Successfully";
pub const MSG_CUSTOMER_UPDATED: &str = "Customer updated successfully";
pub const MSG_CUSTOMER_DELETE_FAILED: &str = "Failed to delete customer";
pub const MSG_CUSTOMER_DELETED: &str = "Customer deleted successfully";
pub const MSG_CUSTOMER_NOT_FOUND: &str = "Customer not found or is already deleted";
