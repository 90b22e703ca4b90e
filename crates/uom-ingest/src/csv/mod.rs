mod reader;

pub use reader::{check_file, read_csv_frame};
