use crate::config_descriptor::ConfigDescriptor;
use crate::device::{Device, DeviceDescriptor, ProductID, VendorID};
use crate::error::{Error, Fault, Level};
use crate::path::DescriptorPath;
use crate::validate::malformed;
use crate::version::Version;

impl From<&libusb1_sys::libusb_device_descriptor> for DeviceDescriptor {
    fn from(d: &libusb1_sys::libusb_device_descriptor) -> Self {
        DeviceDescriptor {
            length: d.bLength,
            descriptor_type: d.bDescriptorType,
            usb_version: Version(d.bcdUSB),
            class: d.bDeviceClass,
            sub_class: d.bDeviceSubClass,
            protocol: d.bDeviceProtocol,
            max_packet_size_0: d.bMaxPacketSize0,
            vendor_id: VendorID(d.idVendor),
            product_id: ProductID(d.idProduct),
            device_version: Version(d.bcdDevice),
            manufacturer_index: d.iManufacturer,
            product_index: d.iProduct,
            serial_number_index: d.iSerialNumber,
            num_configurations: d.bNumConfigurations,
        }
    }
}
impl From<libusb1_sys::libusb_device_descriptor> for DeviceDescriptor {
    fn from(d: libusb1_sys::libusb_device_descriptor) -> Self {
        DeviceDescriptor::from(&d)
    }
}

impl Device {
    /// Snapshots a device from its libusb descriptor and the config descriptors fetched for
    /// it (`libusb_get_config_descriptor` for each index in `0..bNumConfigurations`).
    /// # Safety
    /// Every config descriptor must be a valid libusb allocation whose arrays match their
    /// count fields or are null.
    pub unsafe fn from_libusb(
        descriptor: &libusb1_sys::libusb_device_descriptor,
        configs: &[&libusb1_sys::libusb_config_descriptor],
    ) -> Result<Device, Error> {
        let path = DescriptorPath::root("device");
        if usize::from(descriptor.bNumConfigurations) != configs.len() {
            return Err(malformed(
                Level::Device,
                &path,
                Fault::CountMismatch {
                    declared: i64::from(descriptor.bNumConfigurations),
                    actual: configs.len(),
                },
            ));
        }
        let configs = configs
            .iter()
            .enumerate()
            .map(|(i, config)| ConfigDescriptor::snapshot(config, &path.child("config", i)))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Device::new(DeviceDescriptor::from(descriptor), configs))
    }
}
