//! Snapshots of descriptor structures owned by libusb.
//!
//! libusb hands out `libusb_device_descriptor` by value and `libusb_config_descriptor` as a
//! tree of raw arrays sized by count fields. These conversions copy both into the owned
//! model so the printer never touches libusb memory. Nothing here enumerates or opens
//! devices; callers pass in structures they already hold.
pub mod config_descriptor;
pub mod device_descriptor;

use crate::error::{Error, Fault, Level};
use crate::path::DescriptorPath;
use crate::validate::malformed;

/// Borrows a libusb child array of `declared` entries.
/// # Safety
/// If `ptr` is non-null it must point to at least `declared` initialized `T`s that outlive `'a`.
unsafe fn entries<'a, T>(
    ptr: *const T,
    declared: i64,
    level: Level,
    path: &DescriptorPath,
) -> Result<&'a [T], Error> {
    if declared < 0 {
        return Err(malformed(
            level,
            path,
            Fault::CountMismatch {
                declared,
                actual: 0,
            },
        ));
    }
    if declared == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(malformed(level, path, Fault::NullEntries { declared }));
    }
    Ok(core::slice::from_raw_parts(ptr, declared as usize))
}
