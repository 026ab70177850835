//! USB endpoint descriptors.
use core::fmt;

/// `bDescriptorType` of an endpoint descriptor.
pub const ENDPOINT_DESCRIPTOR_TYPE: u8 = 0x05;
/// `bLength` of an endpoint descriptor. Audio endpoints carry 2 extra bytes.
pub const ENDPOINT_DESCRIPTOR_LEN: u8 = 7;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    /// Device to host.
    In,
    /// Host to device.
    Out,
}

/// Raw `bEndpointAddress`. Bit 7 is the direction, bits 0..=3 the endpoint number.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
pub struct EndpointAddress(pub u8);
impl EndpointAddress {
    pub const fn number(self) -> u8 {
        self.0 & 0x0F
    }
    pub const fn direction(self) -> Direction {
        if self.0 & 0x80 == 0 {
            Direction::Out
        } else {
            Direction::In
        }
    }
}
impl From<EndpointAddress> for u8 {
    fn from(address: EndpointAddress) -> Self {
        address.0
    }
}
impl From<u8> for EndpointAddress {
    fn from(address: u8) -> Self {
        EndpointAddress(address)
    }
}
impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl fmt::LowerHex for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// One endpoint of an interface alternate setting, laid out like `usb_endpoint_descriptor`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EndpointDescriptor {
    pub length: u8,
    pub descriptor_type: u8,
    pub address: EndpointAddress,
    pub attributes: u8,
    pub max_packet_size: u16,
    pub interval: u8,
    /// Audio only.
    pub refresh: u8,
    /// Audio only.
    pub synch_address: u8,
}
impl EndpointDescriptor {
    /// A bulk endpoint with the given address and packet size.
    pub fn new(address: EndpointAddress, max_packet_size: u16) -> EndpointDescriptor {
        EndpointDescriptor {
            length: ENDPOINT_DESCRIPTOR_LEN,
            descriptor_type: ENDPOINT_DESCRIPTOR_TYPE,
            address,
            attributes: 0x02,
            max_packet_size,
            interval: 0,
            refresh: 0,
            synch_address: 0,
        }
    }
    pub fn direction(&self) -> Direction {
        self.address.direction()
    }
    pub fn number(&self) -> u8 {
        self.address.number()
    }
}
