mod writer;

pub use writer::{render_kml, write_kml_file};
