use super::entries;
use crate::config_descriptor::ConfigDescriptor;
use crate::endpoints::{EndpointAddress, EndpointDescriptor};
use crate::error::{Error, Level};
use crate::interface_descriptor::{Interface, InterfaceDescriptor};
use crate::path::DescriptorPath;

impl ConfigDescriptor {
    /// Copies a config descriptor tree out of libusb. Counts are trusted as array lengths;
    /// a null array behind a non-zero count is rejected.
    /// # Safety
    /// `raw` must come from `libusb_get_config_descriptor` (or be laid out the same way)
    /// and not yet be freed.
    pub unsafe fn from_libusb(
        raw: &libusb1_sys::libusb_config_descriptor,
    ) -> Result<ConfigDescriptor, Error> {
        Self::snapshot(raw, &DescriptorPath::root("config"))
    }
    pub(crate) unsafe fn snapshot(
        raw: &libusb1_sys::libusb_config_descriptor,
        path: &DescriptorPath,
    ) -> Result<ConfigDescriptor, Error> {
        let raw_interfaces = entries(
            raw.interface as *const libusb1_sys::libusb_interface,
            i64::from(raw.bNumInterfaces),
            Level::Config,
            path,
        )?;
        let mut interfaces = Vec::with_capacity(raw_interfaces.len());
        for (i, interface) in raw_interfaces.iter().enumerate() {
            interfaces.push(snapshot_interface(interface, &path.child("interface", i))?);
        }
        Ok(ConfigDescriptor {
            length: raw.bLength,
            descriptor_type: raw.bDescriptorType,
            total_length: raw.wTotalLength,
            num_interfaces: raw.bNumInterfaces,
            configuration_value: raw.bConfigurationValue,
            configuration_index: raw.iConfiguration,
            attributes: raw.bmAttributes,
            max_power: raw.bMaxPower,
            interfaces,
        })
    }
}

unsafe fn snapshot_interface(
    raw: &libusb1_sys::libusb_interface,
    path: &DescriptorPath,
) -> Result<Interface, Error> {
    let raw_altsettings = entries(
        raw.altsetting as *const libusb1_sys::libusb_interface_descriptor,
        i64::from(raw.num_altsetting),
        Level::Interface,
        path,
    )?;
    let mut altsettings = Vec::with_capacity(raw_altsettings.len());
    for (i, altsetting) in raw_altsettings.iter().enumerate() {
        altsettings.push(snapshot_interface_descriptor(
            altsetting,
            &path.child("altsetting", i),
        )?);
    }
    Ok(Interface {
        num_altsetting: raw.num_altsetting,
        altsettings,
    })
}

unsafe fn snapshot_interface_descriptor(
    raw: &libusb1_sys::libusb_interface_descriptor,
    path: &DescriptorPath,
) -> Result<InterfaceDescriptor, Error> {
    let endpoints = entries(
        raw.endpoint as *const libusb1_sys::libusb_endpoint_descriptor,
        i64::from(raw.bNumEndpoints),
        Level::InterfaceDescriptor,
        path,
    )?;
    Ok(InterfaceDescriptor {
        length: raw.bLength,
        descriptor_type: raw.bDescriptorType,
        interface_number: raw.bInterfaceNumber,
        alternate_setting: raw.bAlternateSetting,
        num_endpoints: raw.bNumEndpoints,
        class: raw.bInterfaceClass,
        sub_class: raw.bInterfaceSubClass,
        protocol: raw.bInterfaceProtocol,
        interface_index: raw.iInterface,
        endpoints: endpoints.iter().map(EndpointDescriptor::from).collect(),
    })
}

impl From<&libusb1_sys::libusb_endpoint_descriptor> for EndpointDescriptor {
    fn from(raw: &libusb1_sys::libusb_endpoint_descriptor) -> Self {
        EndpointDescriptor {
            length: raw.bLength,
            descriptor_type: raw.bDescriptorType,
            address: EndpointAddress(raw.bEndpointAddress),
            attributes: raw.bmAttributes,
            max_packet_size: raw.wMaxPacketSize,
            interval: raw.bInterval,
            refresh: raw.bRefresh,
            synch_address: raw.bSynchAddress,
        }
    }
}
