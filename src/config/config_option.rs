/// A configuration option, with a name and the range of values the option may take.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, provided the value is within the range of the option.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        if self.min <= value && value <= self.max {
            self.value = value;
            true
        } else {
            false
        }
    }
}

impl ConfigOption<bool> {
    /// A boolean option, with the given default.
    pub const fn switch(name: &'static str, value: bool) -> Self {
        ConfigOption {
            name,
            min: false,
            max: true,
            value,
        }
    }
}
