use crate::interface_descriptor::Interface;

/// `bDescriptorType` of a configuration descriptor.
pub const CONFIG_DESCRIPTOR_TYPE: u8 = 0x02;
/// `bLength` of a configuration descriptor.
pub const CONFIG_DESCRIPTOR_LEN: u8 = 9;

/// One configuration of a device, laid out like `usb_config_descriptor`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigDescriptor {
    pub length: u8,
    pub descriptor_type: u8,
    pub total_length: u16,
    /// `bNumInterfaces`. Must match `interfaces.len()`.
    pub num_interfaces: u8,
    pub configuration_value: u8,
    pub configuration_index: u8,
    pub attributes: u8,
    /// `MaxPower` in 2 mA units.
    pub max_power: u8,
    pub interfaces: Vec<Interface>,
}
impl ConfigDescriptor {
    /// Bus powered configuration with no interfaces yet.
    pub fn new(configuration_value: u8) -> ConfigDescriptor {
        ConfigDescriptor {
            length: CONFIG_DESCRIPTOR_LEN,
            descriptor_type: CONFIG_DESCRIPTOR_TYPE,
            total_length: u16::from(CONFIG_DESCRIPTOR_LEN),
            num_interfaces: 0,
            configuration_value,
            configuration_index: 0,
            attributes: 0x80,
            max_power: 50,
            interfaces: Vec::new(),
        }
    }
    /// Appends an interface and bumps `bNumInterfaces` with it.
    pub fn with_interface(mut self, interface: Interface) -> ConfigDescriptor {
        self.num_interfaces = self.num_interfaces.wrapping_add(1);
        self.interfaces.push(interface);
        self
    }
    pub fn number(&self) -> u8 {
        self.configuration_value
    }
    /// Returns max power in milliamps
    pub fn max_power_ma(&self) -> u16 {
        u16::from(self.max_power) * 2
    }
    /// Indicates if the device is self-powered in this configuration.
    pub fn self_powered(&self) -> bool {
        self.attributes & 0x40 != 0
    }

    /// Indicates if the device has remote wakeup capability in this configuration.
    pub fn remote_wakeup(&self) -> bool {
        self.attributes & 0x20 != 0
    }

    /// Returns the index of the string descriptor that describes the configuration.
    pub fn description_string_index(&self) -> Option<u8> {
        match self.configuration_index {
            0 => None,
            n => Some(n),
        }
    }
}
