//! Line oriented debug dumps of descriptor trees.
//!
//! Each level is indented by its depth, two spaces per level, and opens with an identity
//! line (`usb_config_descriptor at device.config[0]`). Output looks like:
//!
//! ```text
//! usb_device at device
//! usb_device_descriptor at device.descriptor
//!   bNumConfigurations: 1
//!   idVendor: 1234
//!   idProduct: 5678
//! usb_config_descriptor at device.config[0]
//!   bLength: 9
//!   ...
//!   usb_interface at device.config[0].interface[0]
//!     num_altsetting: 1
//!     usb_interface_descriptor at device.config[0].interface[0].altsetting[0]
//!       ...
//!       usb_endpoint_descriptor at device.config[0].interface[0].altsetting[0].endpoint[0]
//!         bEndpointAddress: 129 (81)
//! ```
use crate::config_descriptor::ConfigDescriptor;
use crate::device::{Device, DeviceDescriptor};
use crate::endpoints::EndpointDescriptor;
use crate::error::Error;
use crate::interface_descriptor::{Interface, InterfaceDescriptor};
use crate::path::DescriptorPath;
use crate::validate::Validate;
use core::fmt;
use log::{debug, trace};
use std::io::{self, Write};

const CONFIG_INDENT: usize = 0;
const INTERFACE_INDENT: usize = 2;
const ALTSETTING_INDENT: usize = 4;
const ENDPOINT_INDENT: usize = 6;
const FIELD_INDENT: usize = 2;

/// How each block's identity line names its entity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Identity {
    /// Index path such as `device.config[0].interface[1]`. Deterministic.
    Path,
    /// Address of the borrowed entity, like C's `%p`. Differs between runs.
    Address,
}
impl Default for Identity {
    fn default() -> Self {
        Identity::Path
    }
}

/// Which fields get printed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Detail {
    /// Device: bNumConfigurations, idVendor, idProduct. Endpoint: bLength,
    /// bDescriptorType, bEndpointAddress, wMaxPacketSize.
    Standard,
    /// Every device descriptor field, plus bmAttributes, bInterval, bRefresh and
    /// bSynchAddress for endpoints.
    Full,
}
impl Default for Detail {
    fn default() -> Self {
        Detail::Standard
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PrintOptions {
    pub identity: Identity,
    pub detail: Detail,
}
impl PrintOptions {
    pub fn new() -> PrintOptions {
        PrintOptions::default()
    }
    pub fn identity(mut self, identity: Identity) -> PrintOptions {
        self.identity = identity;
        self
    }
    pub fn detail(mut self, detail: Detail) -> PrintOptions {
        self.detail = detail;
        self
    }
}

/// Dumps descriptor trees into `W`.
///
/// Every `print_*` method validates the subtree it is given first and writes nothing if
/// any count field disagrees with its children.
pub struct DescriptorPrinter<W: Write> {
    out: W,
    options: PrintOptions,
}
impl<W: Write> DescriptorPrinter<W> {
    pub fn new(out: W) -> DescriptorPrinter<W> {
        Self::with_options(out, PrintOptions::default())
    }
    pub fn with_options(out: W, options: PrintOptions) -> DescriptorPrinter<W> {
        DescriptorPrinter { out, options }
    }
    pub fn options(&self) -> PrintOptions {
        self.options
    }
    pub fn get_ref(&self) -> &W {
        &self.out
    }
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_device(&mut self, device: &Device) -> Result<(), Error> {
        let path = DescriptorPath::root("device");
        device.validate(&path)?;
        debug!(
            "dumping device {:04x}:{:04x} with {} configuration(s)",
            device.descriptor.vendor_id,
            device.descriptor.product_id,
            device.descriptor.num_configurations
        );
        self.device(device, &path)?;
        self.out.flush()?;
        Ok(())
    }
    pub fn print_device_descriptor(&mut self, descriptor: &DeviceDescriptor) -> Result<(), Error> {
        self.device_descriptor(descriptor, &DescriptorPath::root("descriptor"))?;
        Ok(())
    }
    pub fn print_config(&mut self, config: &ConfigDescriptor) -> Result<(), Error> {
        let path = DescriptorPath::root("config");
        config.validate(&path)?;
        self.config(config, &path)?;
        Ok(())
    }
    pub fn print_interface(&mut self, interface: &Interface) -> Result<(), Error> {
        let path = DescriptorPath::root("interface");
        interface.validate(&path)?;
        self.interface(interface, &path)?;
        Ok(())
    }
    pub fn print_interface_descriptor(
        &mut self,
        descriptor: &InterfaceDescriptor,
    ) -> Result<(), Error> {
        let path = DescriptorPath::root("altsetting");
        descriptor.validate(&path)?;
        self.interface_descriptor(descriptor, &path)?;
        Ok(())
    }
    pub fn print_endpoint_descriptor(
        &mut self,
        endpoint: &EndpointDescriptor,
    ) -> Result<(), Error> {
        self.endpoint_descriptor(endpoint, &DescriptorPath::root("endpoint"))?;
        Ok(())
    }

    // Everything below assumes the tree was validated, so children are walked by slice.

    fn device(&mut self, device: &Device, path: &DescriptorPath) -> io::Result<()> {
        self.identity(0, "usb_device", device, path)?;
        self.device_descriptor(&device.descriptor, &path.field("descriptor"))?;
        for (i, config) in device.configs.iter().enumerate() {
            self.config(config, &path.child("config", i))?;
        }
        Ok(())
    }
    fn device_descriptor(
        &mut self,
        descriptor: &DeviceDescriptor,
        path: &DescriptorPath,
    ) -> io::Result<()> {
        const INDENT: usize = FIELD_INDENT;
        self.identity(0, "usb_device_descriptor", descriptor, path)?;
        match self.options.detail {
            Detail::Standard => {
                self.field(INDENT, "bNumConfigurations", descriptor.num_configurations)?;
                self.field(INDENT, "idVendor", format_args!("{:x}", descriptor.vendor_id))?;
                self.field(INDENT, "idProduct", format_args!("{:x}", descriptor.product_id))?;
            }
            Detail::Full => {
                self.field(INDENT, "bLength", descriptor.length)?;
                self.field(INDENT, "bDescriptorType", descriptor.descriptor_type)?;
                self.field(INDENT, "bcdUSB", format_args!("{:x}", descriptor.usb_version))?;
                self.field(INDENT, "bDeviceClass", descriptor.class)?;
                self.field(INDENT, "bDeviceSubClass", descriptor.sub_class)?;
                self.field(INDENT, "bDeviceProtocol", descriptor.protocol)?;
                self.field(INDENT, "bMaxPacketSize0", descriptor.max_packet_size_0)?;
                self.field(INDENT, "idVendor", format_args!("{:x}", descriptor.vendor_id))?;
                self.field(INDENT, "idProduct", format_args!("{:x}", descriptor.product_id))?;
                self.field(INDENT, "bcdDevice", format_args!("{:x}", descriptor.device_version))?;
                self.field(INDENT, "iManufacturer", descriptor.manufacturer_index)?;
                self.field(INDENT, "iProduct", descriptor.product_index)?;
                self.field(INDENT, "iSerialNumber", descriptor.serial_number_index)?;
                self.field(INDENT, "bNumConfigurations", descriptor.num_configurations)?;
            }
        }
        Ok(())
    }
    fn config(&mut self, config: &ConfigDescriptor, path: &DescriptorPath) -> io::Result<()> {
        const INDENT: usize = CONFIG_INDENT + FIELD_INDENT;
        trace!("config {} with {} interface(s)", path, config.num_interfaces);
        self.identity(CONFIG_INDENT, "usb_config_descriptor", config, path)?;
        self.field(INDENT, "bLength", config.length)?;
        self.field(INDENT, "bDescriptorType", config.descriptor_type)?;
        self.field(INDENT, "wTotalLength", config.total_length)?;
        self.field(INDENT, "bNumInterfaces", config.num_interfaces)?;
        self.field(INDENT, "bConfigurationValue", config.configuration_value)?;
        self.field(INDENT, "iConfiguration", config.configuration_index)?;
        self.field(INDENT, "bmAttributes", config.attributes)?;
        self.field(INDENT, "MaxPower", config.max_power)?;
        for (i, interface) in config.interfaces.iter().enumerate() {
            self.interface(interface, &path.child("interface", i))?;
        }
        Ok(())
    }
    fn interface(&mut self, interface: &Interface, path: &DescriptorPath) -> io::Result<()> {
        trace!("interface {} with {} altsetting(s)", path, interface.num_altsetting);
        self.identity(INTERFACE_INDENT, "usb_interface", interface, path)?;
        self.field(
            INTERFACE_INDENT + FIELD_INDENT,
            "num_altsetting",
            interface.num_altsetting,
        )?;
        for (i, altsetting) in interface.altsettings.iter().enumerate() {
            self.interface_descriptor(altsetting, &path.child("altsetting", i))?;
        }
        Ok(())
    }
    fn interface_descriptor(
        &mut self,
        descriptor: &InterfaceDescriptor,
        path: &DescriptorPath,
    ) -> io::Result<()> {
        const INDENT: usize = ALTSETTING_INDENT + FIELD_INDENT;
        self.identity(ALTSETTING_INDENT, "usb_interface_descriptor", descriptor, path)?;
        self.field(INDENT, "bLength", descriptor.length)?;
        self.field(INDENT, "bDescriptorType", descriptor.descriptor_type)?;
        self.field(INDENT, "bInterfaceNumber", descriptor.interface_number)?;
        self.field(INDENT, "bAlternateSetting", descriptor.alternate_setting)?;
        self.field(INDENT, "bNumEndpoints", descriptor.num_endpoints)?;
        self.field(INDENT, "bInterfaceClass", descriptor.class)?;
        self.field(INDENT, "bInterfaceSubClass", descriptor.sub_class)?;
        self.field(INDENT, "bInterfaceProtocol", descriptor.protocol)?;
        self.field(INDENT, "iInterface", descriptor.interface_index)?;
        for (i, endpoint) in descriptor.endpoints.iter().enumerate() {
            self.endpoint_descriptor(endpoint, &path.child("endpoint", i))?;
        }
        Ok(())
    }
    fn endpoint_descriptor(
        &mut self,
        endpoint: &EndpointDescriptor,
        path: &DescriptorPath,
    ) -> io::Result<()> {
        const INDENT: usize = ENDPOINT_INDENT + FIELD_INDENT;
        self.identity(ENDPOINT_INDENT, "usb_endpoint_descriptor", endpoint, path)?;
        self.field(INDENT, "bLength", endpoint.length)?;
        self.field(INDENT, "bDescriptorType", endpoint.descriptor_type)?;
        self.field(
            INDENT,
            "bEndpointAddress",
            format_args!("{} ({:x})", endpoint.address, endpoint.address),
        )?;
        if self.options.detail == Detail::Full {
            self.field(INDENT, "bmAttributes", endpoint.attributes)?;
        }
        self.field(INDENT, "wMaxPacketSize", endpoint.max_packet_size)?;
        if self.options.detail == Detail::Full {
            self.field(INDENT, "bInterval", endpoint.interval)?;
            self.field(INDENT, "bRefresh", endpoint.refresh)?;
            self.field(INDENT, "bSynchAddress", endpoint.synch_address)?;
        }
        Ok(())
    }

    fn identity<T>(
        &mut self,
        indent: usize,
        name: &str,
        entity: &T,
        path: &DescriptorPath,
    ) -> io::Result<()> {
        match self.options.identity {
            Identity::Path => writeln!(
                self.out,
                "{:indent$}{} at {}",
                "",
                name,
                path,
                indent = indent
            ),
            Identity::Address => writeln!(
                self.out,
                "{:indent$}{} at {:p}",
                "",
                name,
                entity,
                indent = indent
            ),
        }
    }
    fn field<V: fmt::Display>(&mut self, indent: usize, name: &str, value: V) -> io::Result<()> {
        writeln!(self.out, "{:indent$}{}: {}", "", name, value, indent = indent)
    }
}

/// Dumps `device` into a `String` instead of a sink.
pub fn render_device(device: &Device, options: PrintOptions) -> Result<String, Error> {
    let mut printer = DescriptorPrinter::with_options(Vec::new(), options);
    printer.print_device(device)?;
    Ok(String::from_utf8_lossy(&printer.into_inner()).into_owned())
}

macro_rules! stdout_printer {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $name(entity: &$ty) -> Result<(), Error> {
            let stdout = io::stdout();
            let mut printer = DescriptorPrinter::new(stdout.lock());
            printer.$name(entity)
        }
    };
}
stdout_printer!(
    /// Dumps a whole device tree to standard output.
    print_device,
    Device
);
stdout_printer!(print_device_descriptor, DeviceDescriptor);
stdout_printer!(print_config, ConfigDescriptor);
stdout_printer!(print_interface, Interface);
stdout_printer!(print_interface_descriptor, InterfaceDescriptor);
stdout_printer!(print_endpoint_descriptor, EndpointDescriptor);
