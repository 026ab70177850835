use crate::endpoints::EndpointDescriptor;

/// `bDescriptorType` of an interface descriptor.
pub const INTERFACE_DESCRIPTOR_TYPE: u8 = 0x04;
/// `bLength` of an interface descriptor.
pub const INTERFACE_DESCRIPTOR_LEN: u8 = 9;

/// One interface and all of its alternate settings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Interface {
    /// `num_altsetting`. Signed like libusb's `int`; a negative count is malformed.
    pub num_altsetting: i32,
    pub altsettings: Vec<InterfaceDescriptor>,
}
impl Interface {
    pub fn new() -> Interface {
        Interface::default()
    }
    /// Appends an alternate setting and bumps `num_altsetting` with it.
    pub fn with_altsetting(mut self, altsetting: InterfaceDescriptor) -> Interface {
        self.num_altsetting = self.num_altsetting.wrapping_add(1);
        self.altsettings.push(altsetting);
        self
    }
    pub fn descriptors(&self) -> impl Iterator<Item = &InterfaceDescriptor> {
        self.altsettings.iter()
    }
}

/// One alternate setting of an interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InterfaceDescriptor {
    pub length: u8,
    pub descriptor_type: u8,
    pub interface_number: u8,
    pub alternate_setting: u8,
    /// `bNumEndpoints`. Must match `endpoints.len()`.
    pub num_endpoints: u8,
    pub class: u8,
    pub sub_class: u8,
    pub protocol: u8,
    pub interface_index: u8,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl InterfaceDescriptor {
    pub fn new(interface_number: u8, alternate_setting: u8) -> InterfaceDescriptor {
        InterfaceDescriptor {
            length: INTERFACE_DESCRIPTOR_LEN,
            descriptor_type: INTERFACE_DESCRIPTOR_TYPE,
            interface_number,
            alternate_setting,
            num_endpoints: 0,
            class: 0,
            sub_class: 0,
            protocol: 0,
            interface_index: 0,
            endpoints: Vec::new(),
        }
    }
    /// Sets the class, sub class and protocol codes.
    pub fn with_codes(mut self, class: u8, sub_class: u8, protocol: u8) -> InterfaceDescriptor {
        self.class = class;
        self.sub_class = sub_class;
        self.protocol = protocol;
        self
    }
    /// Appends an endpoint and bumps `bNumEndpoints` with it.
    pub fn with_endpoint(mut self, endpoint: EndpointDescriptor) -> InterfaceDescriptor {
        self.num_endpoints = self.num_endpoints.wrapping_add(1);
        self.endpoints.push(endpoint);
        self
    }

    /// Returns the index of the string descriptor that describes the interface.
    pub fn description_string_index(&self) -> Option<u8> {
        match self.interface_index {
            0 => None,
            n => Some(n),
        }
    }
}
