use crate::path::DescriptorPath;
use core::fmt;

/// The tree level whose count field disagrees with its children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Level {
    Device,
    Config,
    Interface,
    InterfaceDescriptor,
}
impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Device => "device",
            Level::Config => "config",
            Level::Interface => "interface",
            Level::InterfaceDescriptor => "interface descriptor",
        }
    }
    /// Name of the count field checked at this level.
    pub fn count_field(self) -> &'static str {
        match self {
            Level::Device => "bNumConfigurations",
            Level::Config => "bNumInterfaces",
            Level::Interface => "num_altsetting",
            Level::InterfaceDescriptor => "bNumEndpoints",
        }
    }
}
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Fault {
    /// The count field says `declared` but `actual` children are present.
    CountMismatch { declared: i64, actual: usize },
    /// The count field says `declared` but the child array pointer is null.
    NullEntries { declared: i64 },
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MalformedTree {
    pub level: Level,
    pub path: DescriptorPath,
    pub fault: Fault,
}
impl fmt::Display for MalformedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fault {
            Fault::CountMismatch { declared, actual } => write!(
                f,
                "{} at {}: {} is {} but {} entries are present",
                self.level,
                self.path,
                self.level.count_field(),
                declared,
                actual
            ),
            Fault::NullEntries { declared } => write!(
                f,
                "{} at {}: {} is {} but the entry array is null",
                self.level,
                self.path,
                self.level.count_field(),
                declared
            ),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// A count field disagrees with the entries it counts. Nothing was printed.
    MalformedDescriptorTree(MalformedTree),
    /// The output sink failed.
    Io(std::io::Error),
}
impl Error {
    pub fn malformed_tree(&self) -> Option<&MalformedTree> {
        match self {
            Error::MalformedDescriptorTree(tree) => Some(tree),
            Error::Io(_) => None,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedDescriptorTree(tree) => write!(f, "malformed descriptor tree: {}", tree),
            Error::Io(err) => write!(f, "descriptor dump output error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedDescriptorTree(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
impl From<MalformedTree> for Error {
    fn from(tree: MalformedTree) -> Self {
        Error::MalformedDescriptorTree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_malformed_display() {
        let err = Error::from(MalformedTree {
            level: Level::Config,
            path: DescriptorPath::root("device").child("config", 0),
            fault: Fault::CountMismatch {
                declared: 2,
                actual: 1,
            },
        });
        assert_eq!(
            err.to_string(),
            "malformed descriptor tree: config at device.config[0]: bNumInterfaces is 2 but 1 entries are present"
        );
        assert_eq!(err.malformed_tree().map(|t| t.level), Some(Level::Config));
    }
    #[test]
    pub fn test_io_source() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.malformed_tree().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }
}
