use usbdump::{
    ConfigDescriptor, DescriptorPrinter, Detail, Device, DeviceDescriptor, DeviceIdentifier,
    EndpointAddress, EndpointDescriptor, Interface, InterfaceDescriptor, PrintOptions, ProductID,
    VendorID,
};

pub fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    // Logitech MX310 optical mouse
    let id = DeviceIdentifier {
        vendor_id: VendorID(0x046d),
        product_id: ProductID(0xc01b),
    };
    let mut endpoint = EndpointDescriptor::new(EndpointAddress(0x81), 8);
    endpoint.attributes = 0x03;
    endpoint.interval = 10;
    let device = Device::from(DeviceDescriptor::new(id)).with_config(
        ConfigDescriptor::new(1).with_interface(
            Interface::new().with_altsetting(
                InterfaceDescriptor::new(0, 0)
                    .with_codes(3, 1, 2)
                    .with_endpoint(endpoint),
            ),
        ),
    );

    usbdump::print_device(&device)?;
    println!();

    let stdout = std::io::stdout();
    let mut printer = DescriptorPrinter::with_options(
        stdout.lock(),
        PrintOptions::new().detail(Detail::Full),
    );
    printer.print_device(&device)?;
    Ok(())
}
