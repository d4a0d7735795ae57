//!
//! The grouping key of benchmark records.
//!

///
/// The grouping key of benchmark records.
///
/// Absent components order before any present value.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    /// The benchmark class.
    pub class: Option<String>,
    /// The number of execution streams.
    pub xstreams: Option<u32>,
    /// The number of user-level threads.
    pub threads: Option<u32>,
}

impl Key {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(class: Option<&str>, xstreams: Option<u32>, threads: Option<u32>) -> Self {
        Self {
            class: class.map(str::to_owned),
            xstreams,
            threads,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.class.as_deref() {
            Some(class) => write!(f, "('{class}', ")?,
            None => write!(f, "(None, ")?,
        }
        match self.xstreams {
            Some(xstreams) => write!(f, "{xstreams}, ")?,
            None => write!(f, "None, ")?,
        }
        match self.threads {
            Some(threads) => write!(f, "{threads})"),
            None => write!(f, "None)"),
        }
    }
}
