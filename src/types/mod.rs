mod classification;
mod device_class;
mod device_info;

pub use classification::*;
pub use device_class::*;
pub use device_info::*;
