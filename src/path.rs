//! Index paths naming an entity inside a descriptor tree, e.g.
//! `device.config[0].interface[1].altsetting[0].endpoint[1]`.
use core::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Segment {
    name: &'static str,
    index: Option<usize>,
}

/// Stable stand-in for a memory address. Two dumps of the same tree produce the same paths.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DescriptorPath(Vec<Segment>);
impl DescriptorPath {
    pub fn root(name: &'static str) -> DescriptorPath {
        DescriptorPath(vec![Segment { name, index: None }])
    }
    /// `self.name[index]`
    pub fn child(&self, name: &'static str, index: usize) -> DescriptorPath {
        self.push(Segment {
            name,
            index: Some(index),
        })
    }
    /// `self.name`
    pub fn field(&self, name: &'static str) -> DescriptorPath {
        self.push(Segment { name, index: None })
    }
    pub fn depth(&self) -> usize {
        self.0.len()
    }
    fn push(&self, segment: Segment) -> DescriptorPath {
        let mut segments = self.0.clone();
        segments.push(segment);
        DescriptorPath(segments)
    }
}
impl fmt::Display for DescriptorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.name)?;
            if let Some(index) = segment.index {
                write!(f, "[{}]", index)?;
            }
        }
        Ok(())
    }
}
