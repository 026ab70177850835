use crate::config_descriptor::ConfigDescriptor;
use crate::version::Version;
use core::fmt;

/// `bDescriptorType` of a device descriptor.
pub const DEVICE_DESCRIPTOR_TYPE: u8 = 0x01;
/// `bLength` of a device descriptor.
pub const DEVICE_DESCRIPTOR_LEN: u8 = 18;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub struct VendorID(pub u16);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub struct ProductID(pub u16);

impl fmt::LowerHex for VendorID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
impl fmt::LowerHex for ProductID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub struct DeviceIdentifier {
    pub vendor_id: VendorID,
    pub product_id: ProductID,
}

/// Device class metadata, laid out like `libusb_device_descriptor`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceDescriptor {
    pub length: u8,
    pub descriptor_type: u8,
    pub usb_version: Version,
    pub class: u8,
    pub sub_class: u8,
    pub protocol: u8,
    pub max_packet_size_0: u8,
    pub vendor_id: VendorID,
    pub product_id: ProductID,
    pub device_version: Version,
    pub manufacturer_index: u8,
    pub product_index: u8,
    pub serial_number_index: u8,
    /// `bNumConfigurations`. Must match [`Device::configs`]`.len()`.
    pub num_configurations: u8,
}
impl DeviceDescriptor {
    /// A USB 2.0 descriptor with no configurations and zeroed class codes.
    pub fn new(identifier: DeviceIdentifier) -> DeviceDescriptor {
        DeviceDescriptor {
            length: DEVICE_DESCRIPTOR_LEN,
            descriptor_type: DEVICE_DESCRIPTOR_TYPE,
            usb_version: Version::USB_2_0,
            class: 0,
            sub_class: 0,
            protocol: 0,
            max_packet_size_0: 64,
            vendor_id: identifier.vendor_id,
            product_id: identifier.product_id,
            device_version: Version::default(),
            manufacturer_index: 0,
            product_index: 0,
            serial_number_index: 0,
            num_configurations: 0,
        }
    }
    pub fn device_identifier(&self) -> DeviceIdentifier {
        DeviceIdentifier {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
        }
    }
    /// Returns the index of the string descriptor that contains the manufacturer name.
    pub fn manufacturer_string_index(&self) -> Option<u8> {
        match self.manufacturer_index {
            0 => None,
            n => Some(n),
        }
    }
    /// Returns the index of the string descriptor that contains the product name.
    pub fn product_string_index(&self) -> Option<u8> {
        match self.product_index {
            0 => None,
            n => Some(n),
        }
    }
    /// Returns the index of the string descriptor that contains the device's serial number.
    pub fn serial_number_string_index(&self) -> Option<u8> {
        match self.serial_number_index {
            0 => None,
            n => Some(n),
        }
    }
}

/// One USB device: its descriptor plus every configuration it reports.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Device {
    pub descriptor: DeviceDescriptor,
    pub configs: Vec<ConfigDescriptor>,
}
impl Device {
    /// Builds a device from a descriptor, keeping `bNumConfigurations` as given.
    pub fn new(descriptor: DeviceDescriptor, configs: Vec<ConfigDescriptor>) -> Device {
        Device {
            descriptor,
            configs,
        }
    }
    /// Appends a configuration and bumps `bNumConfigurations` with it.
    pub fn with_config(mut self, config: ConfigDescriptor) -> Device {
        self.descriptor.num_configurations = self.descriptor.num_configurations.wrapping_add(1);
        self.configs.push(config);
        self
    }
    pub fn device_identifier(&self) -> DeviceIdentifier {
        self.descriptor.device_identifier()
    }
}
impl From<DeviceDescriptor> for Device {
    fn from(descriptor: DeviceDescriptor) -> Self {
        Device::new(descriptor, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_ids_print_as_bare_hex() {
        assert_eq!(format!("{:x}", VendorID(0x1234)), "1234");
        assert_eq!(format!("{:x}", ProductID(0x0baf)), "baf");
    }
    #[test]
    pub fn test_with_config_keeps_count() {
        let id = DeviceIdentifier {
            vendor_id: VendorID(0x046d),
            product_id: ProductID(0xc01b),
        };
        let device = Device::from(DeviceDescriptor::new(id))
            .with_config(ConfigDescriptor::new(1))
            .with_config(ConfigDescriptor::new(2));
        assert_eq!(device.descriptor.num_configurations, 2);
        assert_eq!(device.configs.len(), 2);
        assert_eq!(device.device_identifier(), id);
    }
    #[test]
    pub fn test_string_indices() {
        let mut descriptor = DeviceDescriptor::new(DeviceIdentifier::default());
        assert_eq!(descriptor.manufacturer_string_index(), None);
        descriptor.product_index = 2;
        assert_eq!(descriptor.product_string_index(), Some(2));
    }
}
