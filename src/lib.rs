//! Debug dumps of USB descriptor trees.
//!
//! A [`Device`] owns its [`DeviceDescriptor`] and every [`ConfigDescriptor`], which own
//! their [`Interface`]s, alternate settings and endpoints. [`DescriptorPrinter`] walks that
//! tree depth first in ascending index order and writes one field per line.
//!
//! ```
//! use usbdump::{ConfigDescriptor, Device, DeviceDescriptor, DeviceIdentifier, ProductID, VendorID};
//!
//! let id = DeviceIdentifier {
//!     vendor_id: VendorID(0x1234),
//!     product_id: ProductID(0x5678),
//! };
//! let device = Device::from(DeviceDescriptor::new(id)).with_config(ConfigDescriptor::new(1));
//! let dump = usbdump::render_device(&device, Default::default()).unwrap();
//! assert!(dump.contains("  idVendor: 1234\n"));
//! ```
pub mod config_descriptor;
pub mod device;
pub mod endpoints;
pub mod error;
pub mod interface_descriptor;
#[cfg(feature = "libusb")]
pub mod libusb;
pub mod path;
pub mod printer;
pub mod validate;
pub mod version;

pub use config_descriptor::ConfigDescriptor;
pub use device::{Device, DeviceDescriptor, DeviceIdentifier, ProductID, VendorID};
pub use endpoints::{Direction, EndpointAddress, EndpointDescriptor};
pub use error::Error;
pub use interface_descriptor::{Interface, InterfaceDescriptor};
pub use path::DescriptorPath;
pub use printer::{
    print_config, print_device, print_device_descriptor, print_endpoint_descriptor,
    print_interface, print_interface_descriptor, render_device, DescriptorPrinter, Detail,
    Identity, PrintOptions,
};
pub use version::Version;
