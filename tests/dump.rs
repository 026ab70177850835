use usbdump::{
    ConfigDescriptor, DescriptorPrinter, Detail, Device, DeviceDescriptor, DeviceIdentifier,
    EndpointAddress, EndpointDescriptor, Error, Interface, InterfaceDescriptor, PrintOptions,
    ProductID, VendorID,
};

fn identifier() -> DeviceIdentifier {
    DeviceIdentifier {
        vendor_id: VendorID(0x1234),
        product_id: ProductID(0x0baf),
    }
}

/// 1 config, 1 interface, 1 alt-setting, 2 endpoints.
fn single_interface_device() -> Device {
    Device::from(DeviceDescriptor::new(identifier())).with_config(
        ConfigDescriptor::new(1).with_interface(
            Interface::new().with_altsetting(
                InterfaceDescriptor::new(0, 0)
                    .with_codes(0xFF, 0, 0)
                    .with_endpoint(EndpointDescriptor::new(EndpointAddress(129), 64))
                    .with_endpoint(EndpointDescriptor::new(EndpointAddress(0x02), 64)),
            ),
        ),
    )
}

/// Two configs with uneven fan out at every level.
fn wide_device() -> Device {
    let alt = |n: u8, alt: u8, endpoints: u8| {
        (1..=endpoints).fold(InterfaceDescriptor::new(n, alt), |d, e| {
            d.with_endpoint(EndpointDescriptor::new(EndpointAddress(0x80 | e), 512))
        })
    };
    Device::from(DeviceDescriptor::new(identifier()))
        .with_config(
            ConfigDescriptor::new(1)
                .with_interface(
                    Interface::new()
                        .with_altsetting(alt(0, 0, 0))
                        .with_altsetting(alt(0, 1, 3)),
                )
                .with_interface(Interface::new().with_altsetting(alt(1, 0, 1))),
        )
        .with_config(ConfigDescriptor::new(2).with_interface(Interface::new()))
}

fn dump(device: &Device) -> String {
    let mut printer = DescriptorPrinter::new(Vec::new());
    printer.print_device(device).unwrap();
    String::from_utf8(printer.into_inner()).unwrap()
}

fn identity_lines(out: &str) -> Vec<&str> {
    out.lines()
        .map(str::trim_start)
        .filter(|l| l.starts_with("usb_"))
        .collect()
}

/// Identity lines a device dump should produce: the device and its descriptor, then one
/// per config, interface, alt-setting and endpoint.
fn expected_identity_lines(device: &Device) -> usize {
    2 + device
        .configs
        .iter()
        .map(|c| {
            1 + c
                .interfaces
                .iter()
                .map(|i| {
                    1 + i
                        .altsettings
                        .iter()
                        .map(|a| 1 + usize::from(a.num_endpoints))
                        .sum::<usize>()
                })
                .sum::<usize>()
        })
        .sum::<usize>()
}

#[test]
fn single_interface_block_order() {
    let out = dump(&single_interface_device());
    let kinds: Vec<&str> = identity_lines(&out)
        .iter()
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "usb_device",
            "usb_device_descriptor",
            "usb_config_descriptor",
            "usb_interface",
            "usb_interface_descriptor",
            "usb_endpoint_descriptor",
            "usb_endpoint_descriptor",
        ]
    );
}

#[test]
fn single_interface_full_text() {
    let expected = "\
usb_device at device
usb_device_descriptor at device.descriptor
  bNumConfigurations: 1
  idVendor: 1234
  idProduct: baf
usb_config_descriptor at device.config[0]
  bLength: 9
  bDescriptorType: 2
  wTotalLength: 9
  bNumInterfaces: 1
  bConfigurationValue: 1
  iConfiguration: 0
  bmAttributes: 128
  MaxPower: 50
  usb_interface at device.config[0].interface[0]
    num_altsetting: 1
    usb_interface_descriptor at device.config[0].interface[0].altsetting[0]
      bLength: 9
      bDescriptorType: 4
      bInterfaceNumber: 0
      bAlternateSetting: 0
      bNumEndpoints: 2
      bInterfaceClass: 255
      bInterfaceSubClass: 0
      bInterfaceProtocol: 0
      iInterface: 0
      usb_endpoint_descriptor at device.config[0].interface[0].altsetting[0].endpoint[0]
        bLength: 7
        bDescriptorType: 5
        bEndpointAddress: 129 (81)
        wMaxPacketSize: 64
      usb_endpoint_descriptor at device.config[0].interface[0].altsetting[0].endpoint[1]
        bLength: 7
        bDescriptorType: 5
        bEndpointAddress: 2 (2)
        wMaxPacketSize: 64
";
    assert_eq!(dump(&single_interface_device()), expected);
}

#[test]
fn identity_line_count_matches_tree() {
    for device in &[single_interface_device(), wide_device()] {
        let out = dump(device);
        assert_eq!(identity_lines(&out).len(), expected_identity_lines(device));
    }
    assert_eq!(expected_identity_lines(&wide_device()), 14);
}

#[test]
fn ascending_order_at_every_level() {
    let out = dump(&wide_device());
    let paths: Vec<&str> = identity_lines(&out)
        .iter()
        .map(|l| l.rsplit(" at ").next().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "device",
            "device.descriptor",
            "device.config[0]",
            "device.config[0].interface[0]",
            "device.config[0].interface[0].altsetting[0]",
            "device.config[0].interface[0].altsetting[1]",
            "device.config[0].interface[0].altsetting[1].endpoint[0]",
            "device.config[0].interface[0].altsetting[1].endpoint[1]",
            "device.config[0].interface[0].altsetting[1].endpoint[2]",
            "device.config[0].interface[1]",
            "device.config[0].interface[1].altsetting[0]",
            "device.config[0].interface[1].altsetting[0].endpoint[0]",
            "device.config[1]",
            "device.config[1].interface[0]",
        ]
    );
    assert!(out.contains("bEndpointAddress: 131 (83)"));
}

#[test]
fn tree_is_not_mutated() {
    let device = wide_device();
    let snapshot = device.clone();
    dump(&device);
    let mut printer =
        DescriptorPrinter::with_options(Vec::new(), PrintOptions::new().detail(Detail::Full));
    printer.print_device(&device).unwrap();
    assert_eq!(device, snapshot);
}

#[test]
fn zero_configuration_device() {
    let device = Device::from(DeviceDescriptor::new(identifier()));
    assert_eq!(
        dump(&device),
        "usb_device at device\n\
         usb_device_descriptor at device.descriptor\n\
         \x20 bNumConfigurations: 0\n\
         \x20 idVendor: 1234\n\
         \x20 idProduct: baf\n"
    );
}

#[test]
fn malformed_tree_is_rejected_before_output() {
    let mut device = wide_device();
    device.configs[1].interfaces[0].num_altsetting = 1;
    let mut printer = DescriptorPrinter::new(Vec::new());
    match printer.print_device(&device) {
        Err(Error::MalformedDescriptorTree(tree)) => {
            assert_eq!(tree.path.to_string(), "device.config[1].interface[0]");
        }
        other => panic!("expected malformed tree, got {:?}", other),
    }
    assert!(printer.into_inner().is_empty());
}

#[test]
fn render_matches_printer() {
    let device = single_interface_device();
    let rendered = usbdump::render_device(&device, PrintOptions::default()).unwrap();
    assert_eq!(rendered, dump(&device));
}
