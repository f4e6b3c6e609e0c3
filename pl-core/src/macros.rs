pub use std::collections::BTreeMap;

// Generate labels for a k8s object, using klabel!("label1" => "value1") syntax
#[macro_export]
macro_rules! klabel {
    ($($key:expr => $val:expr),+$(,)?) => {
        Some(BTreeMap::from([$(($key.to_string(), $val.to_string())),+]))
    };
}

pub use klabel;
