mod date_key;
mod exif_selector;
mod file_selector;
mod path_validator;

pub use date_key::{Granularity, ModifiedDateKey};
pub use exif_selector::ExifDateFileSelector;
pub use file_selector::{DateFileSelector, FileSelector};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
