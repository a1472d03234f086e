//! Aiven service name derivation
//!
//! Every lifecycle operation must go through [`build_service_name`] so that the
//! name used to create a service is the same one used to delete, bind, update
//! and poll it.

/// Service type created for every instance
pub const SERVICE_TYPE: &str = "elasticsearch";

/// Derive the Aiven service name for a marketplace instance
///
/// The name is the prefix followed by the lowercase hex CRC-32 (IEEE) of the
/// instance id. The checksum keeps names short and within Aiven's character
/// set, but the instance id cannot be recovered from it.
pub fn build_service_name(prefix: &str, instance_id: &str) -> String {
    let checksum = crc32fast::hash(instance_id.as_bytes());
    format!("{}{:x}", prefix, checksum)
}
