#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildVariant {
    Debug,
    Release,
}

impl BuildVariant {
    /// Parse the variant flag passed by the build orchestrator.
    ///
    /// Only the literal `debug` selects the debug subfolder; every other
    /// value (including `release`, `Debug`, or an empty string) is treated
    /// as a release build.
    pub fn from_arg(flag: &str) -> Self {
        if flag == "debug" {
            BuildVariant::Debug
        } else {
            BuildVariant::Release
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }
}
