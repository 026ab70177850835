//! Count checks run before anything is printed.
//!
//! Every count field (`bNumConfigurations`, `bNumInterfaces`, `num_altsetting`,
//! `bNumEndpoints`) must equal the number of children actually present. A dump either
//! sees a consistent tree or writes nothing.
use crate::config_descriptor::ConfigDescriptor;
use crate::device::Device;
use crate::error::{Error, Fault, Level, MalformedTree};
use crate::interface_descriptor::{Interface, InterfaceDescriptor};
use crate::path::DescriptorPath;
use log::warn;

pub trait Validate {
    /// Checks this entity and everything below it. `path` names `self`.
    fn validate(&self, path: &DescriptorPath) -> Result<(), Error>;
}

pub(crate) fn malformed(level: Level, path: &DescriptorPath, fault: Fault) -> Error {
    let tree = MalformedTree {
        level,
        path: path.clone(),
        fault,
    };
    warn!("rejecting descriptor tree: {}", tree);
    Error::MalformedDescriptorTree(tree)
}

fn check_count(
    level: Level,
    path: &DescriptorPath,
    declared: i64,
    actual: usize,
) -> Result<(), Error> {
    if declared < 0 || declared as u64 != actual as u64 {
        Err(malformed(
            level,
            path,
            Fault::CountMismatch { declared, actual },
        ))
    } else {
        Ok(())
    }
}

impl Validate for Device {
    fn validate(&self, path: &DescriptorPath) -> Result<(), Error> {
        check_count(
            Level::Device,
            path,
            i64::from(self.descriptor.num_configurations),
            self.configs.len(),
        )?;
        for (i, config) in self.configs.iter().enumerate() {
            config.validate(&path.child("config", i))?;
        }
        Ok(())
    }
}
impl Validate for ConfigDescriptor {
    fn validate(&self, path: &DescriptorPath) -> Result<(), Error> {
        check_count(
            Level::Config,
            path,
            i64::from(self.num_interfaces),
            self.interfaces.len(),
        )?;
        for (i, interface) in self.interfaces.iter().enumerate() {
            interface.validate(&path.child("interface", i))?;
        }
        Ok(())
    }
}
impl Validate for Interface {
    fn validate(&self, path: &DescriptorPath) -> Result<(), Error> {
        check_count(
            Level::Interface,
            path,
            i64::from(self.num_altsetting),
            self.altsettings.len(),
        )?;
        for (i, altsetting) in self.altsettings.iter().enumerate() {
            altsetting.validate(&path.child("altsetting", i))?;
        }
        Ok(())
    }
}
impl Validate for InterfaceDescriptor {
    fn validate(&self, path: &DescriptorPath) -> Result<(), Error> {
        check_count(
            Level::InterfaceDescriptor,
            path,
            i64::from(self.num_endpoints),
            self.endpoints.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceDescriptor, DeviceIdentifier};
    use crate::endpoints::{EndpointAddress, EndpointDescriptor};

    fn device() -> Device {
        Device::from(DeviceDescriptor::new(DeviceIdentifier::default())).with_config(
            ConfigDescriptor::new(1).with_interface(
                Interface::new().with_altsetting(
                    InterfaceDescriptor::new(0, 0)
                        .with_endpoint(EndpointDescriptor::new(EndpointAddress(0x81), 64)),
                ),
            ),
        )
    }
    fn root() -> DescriptorPath {
        DescriptorPath::root("device")
    }

    #[test]
    pub fn test_consistent_tree() {
        assert!(device().validate(&root()).is_ok());
    }
    #[test]
    pub fn test_endpoint_count_mismatch_names_altsetting() {
        let mut device = device();
        device.configs[0].interfaces[0].altsettings[0].num_endpoints = 3;
        let err = device.validate(&root()).unwrap_err();
        let tree = err.malformed_tree().unwrap();
        assert_eq!(tree.level, Level::InterfaceDescriptor);
        assert_eq!(
            tree.path.to_string(),
            "device.config[0].interface[0].altsetting[0]"
        );
        assert_eq!(
            tree.fault,
            Fault::CountMismatch {
                declared: 3,
                actual: 1
            }
        );
    }
    #[test]
    pub fn test_negative_altsetting_count() {
        let mut device = device();
        device.configs[0].interfaces[0].num_altsetting = -1;
        let err = device.validate(&root()).unwrap_err();
        assert_eq!(err.malformed_tree().unwrap().level, Level::Interface);
    }
    #[test]
    pub fn test_too_few_configs_declared() {
        let mut device = device();
        device.descriptor.num_configurations = 0;
        let err = device.validate(&root()).unwrap_err();
        let tree = err.malformed_tree().unwrap();
        assert_eq!(tree.level, Level::Device);
        assert_eq!(tree.path.to_string(), "device");
    }
}
